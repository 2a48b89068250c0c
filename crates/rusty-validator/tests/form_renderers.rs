//! Integration tests for the form binding and the error renderers

use pretty_assertions::assert_eq;
use rusty_validator::*;

fn name_form() -> HtmlForm {
    HtmlForm::new().with_field(Field::text("name"))
}

fn bound(renderers: Vec<Box<dyn ErrorRenderer>>) -> Form {
    let mut form = Form::new(name_form(), renderers);
    form.validate("presence", ":text", RuleOptions::new().message("Name is required"))
        .unwrap();
    form
}

#[test]
fn test_inline_renderer_sets_message() {
    let mut form = bound(vec![Box::new(InlineErrorRenderer::default())]);
    form.is_valid();

    assert_eq!(
        form.form().to_html(),
        r#"<form><p><input type="text" name="name" value=""><span class="error">Name is required</span></p></form>"#
    );
}

#[test]
fn test_inline_renderer_cleans_message() {
    let mut form = bound(vec![Box::new(InlineErrorRenderer::default())]);
    form.is_valid();
    form.form_mut().set_value("name", "John Doe");
    form.is_valid();

    assert!(form.form().inline_error("name").is_none());
}

#[test]
fn test_inline_renderer_follows_new_message() {
    let mut form = Form::new(name_form(), Vec::new());
    form.validate("presence", "name", RuleOptions::new().message("Name is required"))
        .unwrap()
        .validate("length", "name", RuleOptions::new().min(3).message("Name is too short"))
        .unwrap();

    form.is_valid();
    assert_eq!(form.form().inline_error("name").unwrap().message, "Name is required");

    form.form_mut().set_value("name", "Jo");
    form.is_valid();
    assert_eq!(form.form().inline_error("name").unwrap().message, "Name is too short");
}

#[test]
fn test_list_renderer_sets_banner_and_messages() {
    let banner = "Please check your data before continuing:";
    let mut form = bound(vec![Box::new(ListRenderer::new(banner))]);
    form.is_valid();

    let list = form.form().error_list().unwrap();
    assert_eq!(list.heading, banner);
    assert_eq!(list.items, vec!["Name is required".to_string()]);
}

#[test]
fn test_list_renderer_cleans_messages() {
    let mut form = bound(vec![Box::new(ListRenderer::new("Check:"))]);
    form.is_valid();
    form.form_mut().set_value("name", "John Doe");
    form.is_valid();

    assert!(form.form().error_list().is_none());
    assert!(!form.form().to_html().contains("error-messages"));
}

#[test]
fn test_signup_page() {
    let html = HtmlForm::new()
        .with_field(Field::text("name").id("name"))
        .with_field(Field::email("email").id("email").value("john@localhost"))
        .with_field(Field::password("password").id("password").value("secret"))
        .with_field(Field::password("password_confirmation").id("password_confirmation"));

    let renderers: Vec<Box<dyn ErrorRenderer>> = vec![
        Box::new(InlineErrorRenderer::default()),
        Box::new(ListRenderer::new("Please double check your data before continuing:")),
        Box::new(ContainerRenderer::default()),
    ];

    let mut form = Form::new(html, renderers);
    form.validate("presence", "#name", RuleOptions::new().message("Name is required"))
        .unwrap()
        .validate(
            "format",
            "#email",
            RuleOptions::new().message("E-mail is invalid").format(EMAIL_FORMAT),
        )
        .unwrap()
        .validate("presence", "#password", RuleOptions::new().message("Password is required"))
        .unwrap()
        .validate(
            "length",
            "#password",
            RuleOptions::new()
                .bound_message("min", "Password must have at least 8 characters")
                .min(8),
        )
        .unwrap()
        .validate(
            "confirmation",
            "#password",
            RuleOptions::new().message("Password must be equal to the confirmation"),
        )
        .unwrap();

    assert!(!form.is_valid());
    assert_eq!(
        form.form().error_list().unwrap().items,
        vec![
            "Name is required".to_string(),
            "E-mail is invalid".to_string(),
            "Password must have at least 8 characters".to_string(),
            "Password must be equal to the confirmation".to_string(),
        ]
    );
    assert!(form.form().has_container_class("password", "with-error"));
    assert!(!form.form().has_container_class("password_confirmation", "with-error"));
    assert_eq!(
        form.form().inline_error("password").unwrap().message,
        "Password must have at least 8 characters"
    );

    let fixes = [
        ("name", "John Doe"),
        ("email", "john@example.com"),
        ("password", "12345678"),
        ("password_confirmation", "12345678"),
    ];
    for (name, value) in fixes {
        form.form_mut().set_value(name, value);
    }

    assert!(form.is_valid());
    assert!(form.form().fields().iter().all(|f| f.state.is_clean()));
    assert!(form.form().error_list().is_none());
}

#[test]
fn test_bind_from_config() {
    let config = ValidationConfig::from_toml(
        r##"
        [renderers]
        inline = false
        container = true

        [[validations]]
        kind = "presence"
        selector = ":text"
        "##,
    )
    .unwrap();

    let mut form = config.bind(name_form()).unwrap();

    assert!(!form.is_valid());
    assert!(form.form().has_container_class("name", "with-error"));
    assert!(form.form().inline_error("name").is_none());
}
