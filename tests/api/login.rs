use crate::helpers;
use crate::helpers::{DiagnosticApp, RecordedSignIn, RecordingAuthenticator, TestApp};
use sign_in_form::auth::SignInOutcome;
use sign_in_form::error::AuthError;

const SAMPLE_EMAIL: &str = "jonas_kahnwald@gmail.com";

#[tokio::test]
async fn the_root_redirects_to_the_sign_in_page() {
    let app = TestApp::spawn_app().await;

    let response = app.get_home().await;

    helpers::assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn the_initial_page_has_the_sample_email_and_a_masked_password() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.get_login().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(&format!(r#"value="{}""#, SAMPLE_EMAIL)));
    assert!(html_page.contains(r#"name="password" type="password" required value="""#));
    assert!(html_page.contains(r#"aria-label="Show password""#));
    assert!(!html_page.contains(r#"type="checkbox" checked"#));
}

#[tokio::test]
async fn toggling_visibility_shows_the_password_without_changing_it() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let form = [
        ("email", SAMPLE_EMAIL),
        ("password", "secret"),
        ("show-password", "false"),
    ];

    // Act - Part 1 - Show the password
    let response = app.post_visibility(&form).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"name="password" type="text" required value="secret""#));
    assert!(html_page.contains(r#"aria-label="Hide password""#));
    assert!(html_page.contains(r#"name="show-password" value="true""#));

    // Act - Part 2 - Hide it again
    let form = [
        ("email", SAMPLE_EMAIL),
        ("password", "secret"),
        ("show-password", "true"),
    ];
    let html_page = app.post_visibility(&form).await.text().await.unwrap();

    // Assert
    assert!(html_page.contains(r#"name="password" type="password" required value="secret""#));
    assert!(html_page.contains(r#"aria-label="Show password""#));
}

#[tokio::test]
async fn toggling_visibility_never_signs_in() {
    let app = TestApp::spawn_app().await;
    let form = [("email", SAMPLE_EMAIL), ("password", "secret")];

    app.post_visibility(&form).await;

    assert!(app.authenticator.calls().is_empty());
}

#[tokio::test]
async fn toggling_visibility_keeps_the_checkbox_and_email() {
    let app = TestApp::spawn_app().await;
    let form = [
        ("email", "martha@nielsen.de"),
        ("password", ""),
        ("keep-logged-in", "on"),
    ];

    let html_page = app.post_visibility(&form).await.text().await.unwrap();

    assert!(html_page.contains(r#"value="martha@nielsen.de""#));
    assert!(html_page.contains(r#"type="checkbox" checked"#));
}

#[tokio::test]
async fn a_valid_sign_in_stays_on_the_page_and_is_recorded_once() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let form = [
        ("email", SAMPLE_EMAIL),
        ("password", "secret"),
        ("show-password", "true"),
    ];

    // Act
    let response = app.post_login(&form).await;

    // Assert
    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(
        app.authenticator.calls(),
        vec![RecordedSignIn {
            email: SAMPLE_EMAIL.into(),
            password: "secret".into(),
            keep_logged_in: false,
        }]
    );
}

#[tokio::test]
async fn the_checkbox_is_passed_to_the_authenticator() {
    let app = TestApp::spawn_app().await;
    let form = [
        ("email", SAMPLE_EMAIL),
        ("password", "secret"),
        ("keep-logged-in", "on"),
    ];

    app.post_login(&form).await;

    let calls = app.authenticator.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].keep_logged_in);
}

#[tokio::test]
async fn a_sign_in_with_a_missing_or_malformed_field_is_blocked() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let test_cases = vec![
        (vec![("email", SAMPLE_EMAIL)], "Please fill out the password field."),
        (vec![("password", "secret")], "Please fill out the email field."),
        (
            vec![("email", "ursuladomain.com"), ("password", "secret")],
            "Please enter a valid email address.",
        ),
        (vec![], "Please fill out the email field."),
    ];

    for (form, error_msg) in test_cases {
        // Act
        let response = app.post_login(&form).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The form was not rejected with 400 Bad Request for {:?}",
            form
        );
        let html_page = response.text().await.unwrap();
        assert!(html_page.contains(&format!("<i>{}</i>", error_msg)));
    }
    assert!(app.authenticator.calls().is_empty());
}

#[tokio::test]
async fn a_blocked_sign_in_keeps_what_was_typed() {
    let app = TestApp::spawn_app().await;
    let form = [
        ("email", "not-an-email"),
        ("password", "secret"),
        ("keep-logged-in", "on"),
        ("show-password", "true"),
    ];

    let html_page = app.post_login(&form).await.text().await.unwrap();

    assert!(html_page.contains(r#"value="not-an-email""#));
    assert!(html_page.contains(r#"name="password" type="text" required value="secret""#));
    assert!(html_page.contains(r#"type="checkbox" checked"#));
}

#[tokio::test]
async fn invalid_credentials_are_shown_inline() {
    // Arrange
    let app = TestApp::spawn_app_with(RecordingAuthenticator::new(|| {
        Err(AuthError::InvalidCredentials)
    }))
    .await;
    let form = [
        ("email", SAMPLE_EMAIL),
        ("password", "wrong-password"),
        ("show-password", "true"),
    ];

    // Act
    let response = app.post_login(&form).await;

    // Assert
    assert_eq!(response.status().as_u16(), 401);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("<i>Invalid email or password.</i>"));
    assert!(html_page.contains(&format!(r#"value="{}""#, SAMPLE_EMAIL)));
    assert!(html_page.contains(r#"name="password" type="text" required value="""#));
    assert!(!html_page.contains("wrong-password"));
    assert_eq!(app.authenticator.calls().len(), 1);
}

#[tokio::test]
async fn network_failures_are_shown_inline() {
    let app = TestApp::spawn_app_with(RecordingAuthenticator::new(|| {
        Err(AuthError::Network(anyhow::anyhow!("connection refused")))
    }))
    .await;
    let form = [("email", SAMPLE_EMAIL), ("password", "very-secret")];

    let response = app.post_login(&form).await;

    assert_eq!(response.status().as_u16(), 502);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("We could not reach the sign-in service."));
    assert!(!html_page.contains("connection refused"));
    assert!(!html_page.contains("very-secret"));
}

#[tokio::test]
async fn a_successful_authentication_redirects() {
    let app = TestApp::spawn_app_with(RecordingAuthenticator::new(|| {
        Ok(SignInOutcome::Redirect("/account".into()))
    }))
    .await;
    let form = [("email", SAMPLE_EMAIL), ("password", "secret")];

    let response = app.post_login(&form).await;

    helpers::assert_is_redirect_to(&response, "/account");
}

#[tokio::test]
async fn the_default_application_stays_on_the_page_after_a_valid_sign_in() {
    // Arrange
    let app = DiagnosticApp::spawn().await;
    let form = [("email", SAMPLE_EMAIL), ("password", "secret")];

    // Act
    let response = app.post_login(&form).await;

    // Assert
    assert_eq!(response.status().as_u16(), 204);
}
