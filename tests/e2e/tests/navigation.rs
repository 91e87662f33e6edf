use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    // Make HTTP request to homepage
    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("data-en"), "Should render translatable text");
    assert!(body.contains("data-fr"), "Should carry French text");
    assert!(body.contains("_gotcha"), "Should render the honeypot field");
}

#[tokio::test]
async fn test_page_sections_render() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    for id in ["#about", "#skills", "#projects", "#experience", "#contact"] {
        assert!(page.find_element(id).is_ok(), "{id} section should exist");
    }

    let label = page.find_element("#lang-switch").expect("Language switch should exist");
    assert_eq!(label.trim(), "EN / FR");

    let href = page
        .attribute(".nav-links a", "href")
        .expect("Nav link should exist");
    assert_eq!(href.as_deref(), Some("#about"));

    assert!(page.find_element("input[name='email']").is_ok());
    assert!(page.find_element("textarea[name='message']").is_ok());
    assert!(page.find_element("button[type='submit']").is_ok());
}
