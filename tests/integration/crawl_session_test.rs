// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{
    crawled_pages, href, request, serve_page, settle, test_settings, wait_for_pages,
};
use deepcrawl::domain::models::event::{event_channel, CrawlEvent};
use deepcrawl::domain::services::crawl_service::CrawlService;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_crawl_discovers_linked_pages_breadth_first_ish() {
    let server = MockServer::start().await;
    let seed_html = format!("{}{}", href(&server, "/a"), href(&server, "/b"));
    let a_html = href(&server, "/c");
    serve_page(&server, "/", &seed_html).await;
    serve_page(&server, "/a", &a_html).await;
    serve_page(&server, "/b", "<html>leaf</html>").await;
    serve_page(&server, "/c", "<html>leaf</html>").await;

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 2), tx)
        .await
        .unwrap();

    let events = wait_for_pages(&mut rx, 4, Duration::from_secs(10)).await;
    let pages = crawled_pages(&events);

    let urls: HashSet<_> = pages.iter().map(|(url, _)| url.clone()).collect();
    assert_eq!(urls.len(), 4);
    assert!(urls.contains(&format!("{}/", server.uri())));
    assert!(urls.contains(&format!("{}/a", server.uri())));
    assert!(urls.contains(&format!("{}/b", server.uri())));
    assert!(urls.contains(&format!("{}/c", server.uri())));

    // Depth follows the discovery chain
    for (url, depth) in &pages {
        if url.ends_with("/a") || url.ends_with("/b") {
            assert_eq!(*depth, 1);
        } else if url.ends_with("/c") {
            assert_eq!(*depth, 2);
        } else {
            assert_eq!(*depth, 0);
        }
    }

    service.stop().await;
}

#[tokio::test]
async fn test_mutually_linked_pages_are_crawled_once_each() {
    let server = MockServer::start().await;
    // Seed and /loop link to each other and to themselves
    let seed_html = format!("{}{}", href(&server, "/"), href(&server, "/loop"));
    let loop_html = format!("{}{}", href(&server, "/loop"), href(&server, "/"));
    serve_page(&server, "/", &seed_html).await;
    serve_page(&server, "/loop", &loop_html).await;

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 5), tx)
        .await
        .unwrap();

    let mut events = wait_for_pages(&mut rx, 2, Duration::from_secs(10)).await;
    // Re-pushed duplicates must be silently skipped, not re-crawled
    events.extend(settle(&mut rx, Duration::from_millis(1500)).await);

    assert_eq!(crawled_pages(&events).len(), 2);

    let session = service.session().await.unwrap();
    assert_eq!(session.pages_crawled(), 2);
    assert_eq!(session.results_len(), 2);

    service.stop().await;
}

#[tokio::test]
async fn test_pages_beyond_max_depth_are_not_fetched() {
    let server = MockServer::start().await;
    serve_page(&server, "/", &href(&server, "/l1")).await;
    serve_page(&server, "/l1", &href(&server, "/l2")).await;

    // Depth 2 must never be requested
    Mock::given(method("GET"))
        .and(path("/l2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("too deep"))
        .expect(0)
        .mount(&server)
        .await;

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 1), tx)
        .await
        .unwrap();

    let mut events = wait_for_pages(&mut rx, 2, Duration::from_secs(10)).await;
    events.extend(settle(&mut rx, Duration::from_millis(1500)).await);

    let pages = crawled_pages(&events);
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|(_, depth)| *depth <= 1));

    service.stop().await;
    // Dropping the server verifies the expect(0) guard on /l2
}

#[tokio::test]
async fn test_seed_outside_domain_filter_is_rejected_before_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unreachable"))
        .expect(0)
        .mount(&server)
        .await;

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/x", server.uri()), "b.test", 3), tx)
        .await
        .unwrap();

    let events = settle(&mut rx, Duration::from_millis(1500)).await;
    assert!(crawled_pages(&events).is_empty());
    assert!(!events
        .iter()
        .any(|event| matches!(event, CrawlEvent::FetchError { .. })));

    service.stop().await;
}

#[tokio::test]
async fn test_failed_fetch_surfaces_as_event_without_killing_session() {
    let server = MockServer::start().await;
    let seed_html = format!("{}{}", href(&server, "/missing"), href(&server, "/ok"));
    serve_page(&server, "/", &seed_html).await;
    serve_page(&server, "/ok", "<html>fine</html>").await;
    // /missing is not mounted, wiremock answers 404

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 2), tx)
        .await
        .unwrap();

    let events = wait_for_pages(&mut rx, 2, Duration::from_secs(10)).await;

    let errors: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            CrawlEvent::FetchError { url, message } => Some((url.clone(), message.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].0.ends_with("/missing"));
    assert!(errors[0].1.contains("404"));

    // The sibling page was still crawled after the failure
    let urls: HashSet<_> = crawled_pages(&events)
        .into_iter()
        .map(|(url, _)| url)
        .collect();
    assert!(urls.contains(&format!("{}/ok", server.uri())));

    service.stop().await;
}

#[tokio::test]
async fn test_counter_matches_results_at_quiescence() {
    let server = MockServer::start().await;
    let seed_html: String = (1..=5)
        .map(|i| href(&server, &format!("/p{}", i)))
        .collect();
    serve_page(&server, "/", &seed_html).await;
    for i in 1..=5 {
        serve_page(&server, &format!("/p{}", i), "<html>leaf</html>").await;
    }

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 3), tx)
        .await
        .unwrap();

    let mut events = wait_for_pages(&mut rx, 6, Duration::from_secs(10)).await;
    events.extend(settle(&mut rx, Duration::from_millis(1000)).await);

    let session = service.session().await.unwrap();
    assert_eq!(session.pages_crawled(), session.results_len() as u64);
    assert_eq!(session.pages_crawled(), 6);

    service.stop().await;
}

#[tokio::test]
async fn test_progress_ticks_arrive_while_running() {
    let server = MockServer::start().await;
    serve_page(&server, "/", "<html>just one page</html>").await;

    let service = CrawlService::new(test_settings()).unwrap();
    let (tx, mut rx) = event_channel();
    service
        .start(request(&format!("{}/", server.uri()), "127.0.0.1", 1), tx)
        .await
        .unwrap();

    // Stay running across at least two reporter periods
    let events = settle(&mut rx, Duration::from_millis(2600)).await;

    let ticks: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            CrawlEvent::ProgressTick {
                elapsed_seconds,
                pages_crawled,
            } => Some((*elapsed_seconds, *pages_crawled)),
            _ => None,
        })
        .collect();

    assert!(ticks.len() >= 2, "expected periodic ticks, got {:?}", ticks);
    // The counter snapshot eventually reflects the crawled seed
    assert_eq!(ticks.last().unwrap().1, 1);

    service.stop().await;
}
