//! Handler tests. They need the wasm client, so run them against
//! `dx serve` with `E2E_BASE_URL` set; otherwise they are skipped.

use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

async fn settle() {
    tokio::time::sleep(Duration::from_millis(250)).await;
}

#[tokio::test]
async fn test_language_toggle_round_trip() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    if !server.serves_client_bundle() {
        eprintln!("skipping: E2E_BASE_URL not set");
        return;
    }

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    let heading = page.find_element("#about h2").expect("About heading");

    page.click("#lang-switch").expect("Click language switch");
    settle().await;
    let lang = page
        .evaluate("document.documentElement.lang")
        .expect("Read lang attribute");
    assert_eq!(lang, "fr");
    let stored = page
        .evaluate("localStorage.getItem('portfolio-lang')")
        .expect("Read stored language");
    assert_eq!(stored, "fr");
    assert_eq!(page.find_element("#lang-switch").unwrap().trim(), "FR / EN");

    page.click("#lang-switch").expect("Click language switch again");
    settle().await;
    assert_eq!(page.find_element("#about h2").unwrap(), heading);
    let stored = page
        .evaluate("localStorage.getItem('portfolio-lang')")
        .expect("Read stored language");
    assert_eq!(stored, "en");
}

#[tokio::test]
async fn test_mobile_menu_toggle() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    if !server.serves_client_bundle() {
        eprintln!("skipping: E2E_BASE_URL not set");
        return;
    }

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.evaluate("document.querySelector('.mobile-toggle').click()")
        .expect("Open menu");
    settle().await;
    let class = page
        .attribute(".nav-links", "class")
        .expect("Nav container");
    assert_eq!(class.as_deref(), Some("nav-links active"));
    let icon = page
        .attribute(".mobile-toggle i", "class")
        .expect("Menu icon");
    assert_eq!(icon.as_deref(), Some("fa-solid fa-xmark"));

    page.evaluate("document.querySelector('.nav-links a').click()")
        .expect("Follow nav link");
    settle().await;
    let class = page
        .attribute(".nav-links", "class")
        .expect("Nav container");
    assert_eq!(class.as_deref(), Some("nav-links"));
}

#[tokio::test]
async fn test_anchor_click_scrolls_without_jumping() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    if !server.serves_client_bundle() {
        eprintln!("skipping: E2E_BASE_URL not set");
        return;
    }

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    let hash_before = page.evaluate("location.hash").expect("Read hash");

    page.evaluate("document.querySelector(\".nav-links a[href='#skills']\").click()")
        .expect("Click skills link");
    // Smooth scrolling takes a moment to land.
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let hash_after = page.evaluate("location.hash").expect("Read hash");
    assert_eq!(hash_after, hash_before, "default jump should be cancelled");

    let delta = page
        .evaluate("window.scrollY - (document.getElementById('skills').offsetTop - 100)")
        .expect("Read scroll position");
    let delta = delta.as_f64().expect("numeric scroll delta");
    assert!(delta.abs() <= 2.0, "scrolled {delta}px away from the target");
}

#[tokio::test]
async fn test_section_reveals_once_scrolled_into_view() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    if !server.serves_client_bundle() {
        eprintln!("skipping: E2E_BASE_URL not set");
        return;
    }

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.find_element("#contact").expect("Contact section");
    settle().await;

    let opacity = "getComputedStyle(document.querySelector('#contact')).opacity";
    assert_eq!(page.evaluate(opacity).expect("Read opacity"), "0");

    page.evaluate("document.querySelector('#contact').scrollIntoView()")
        .expect("Scroll contact into view");
    // Longer than the 1.2s transition.
    tokio::time::sleep(Duration::from_millis(2000)).await;

    assert_eq!(page.evaluate(opacity).expect("Read opacity"), "1");

    // Scrolling away again does not hide it.
    page.evaluate("window.scrollTo(0, 0)").expect("Scroll to top");
    settle().await;
    assert_eq!(page.evaluate(opacity).expect("Read opacity"), "1");
}
