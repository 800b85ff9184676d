//! Integration tests for site configuration editing.
//!
//! Drafts stay private to the editor until commit; after commit every
//! storefront page reflects the new configuration.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use personalistar_admin::AppError;
use personalistar_admin::services::ProfileError;
use personalistar_core::{SlideField, ValidationError};
use personalistar_integration_tests::{TEST_PASSWORD, TEST_USERNAME, TestSite};
use personalistar_storefront::Visitor;
use secrecy::SecretString;

// =============================================================================
// Draft / Commit
// =============================================================================

#[test]
fn test_draft_invisible_until_commit() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();

    editor.set_field("theme.primaryColor", "#123456").unwrap();
    editor.set_field("companyInfo.phone2", "(21) 97777-0000").unwrap();

    let before = site.storefront.home(Visitor::Anonymous, 0);
    assert_eq!(before.layout.theme.primary_color, "#8b5cf6");

    editor.commit().unwrap();
    let after = site.storefront.home(Visitor::Anonymous, 0);
    assert_eq!(
        after.layout.theme.css_variables(),
        "--color-primary: #123456; --color-secondary: #ec4899;"
    );
    assert_eq!(
        after.layout.floating_whatsapp.as_deref(),
        Some("https://wa.me/5521977770000")
    );
}

#[test]
fn test_cancel_discards_draft() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();

    editor.set_field("content.home.heroTitle", "Outro título").unwrap();
    editor.cancel();
    editor.commit().unwrap();

    let home = site.storefront.home(Visitor::Anonymous, 0);
    assert_eq!(home.body.hero_title, "Gráfica Personalistar");
}

#[test]
fn test_invalid_color_rejected_at_commit() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();
    let revision = site.admin.site().revision();

    editor.set_field("theme.secondaryColor", "rosa").unwrap();
    assert!(matches!(editor.commit(), Err(ValidationError::InvalidColor { .. })));
    assert_eq!(site.admin.site().revision(), revision);
    assert!(editor.is_dirty());
}

#[test]
fn test_unknown_path_rejected() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();
    assert!(matches!(
        editor.set_field("theme.accent", "#000000"),
        Err(ValidationError::UnknownPath(_))
    ));
    assert!(!editor.is_dirty());
}

// =============================================================================
// Slides
// =============================================================================

#[test]
fn test_slide_edits_reach_carousel() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();

    let index = editor.add_slide();
    assert_eq!(index, 2);
    editor
        .update_slide_field(index, SlideField::Title, "Nova Coleção Verão")
        .unwrap();
    editor.remove_slide(0).unwrap();
    editor.commit().unwrap();

    let home = site.storefront.home(Visitor::Anonymous, 1);
    let carousel = home.body.carousel.unwrap();
    assert_eq!(carousel.indicators.len(), 2);
    assert_eq!(carousel.current.headline, "Nova");
    assert_eq!(carousel.current.headline_rest, "Coleção Verão");

    let first = site.storefront.home(Visitor::Anonymous, 0).body.carousel.unwrap();
    assert_eq!(first.current.headline, "Personalize");
}

#[test]
fn test_remove_all_slides_hides_carousel() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();
    editor.remove_slide(1).unwrap();
    editor.remove_slide(0).unwrap();
    assert!(matches!(
        editor.remove_slide(0),
        Err(ValidationError::SlideOutOfRange { index: 0 })
    ));
    editor.commit().unwrap();

    assert!(site.storefront.home(Visitor::Anonymous, 0).body.carousel.is_none());
}

// =============================================================================
// Images
// =============================================================================

#[test]
fn test_logo_upload_shows_in_header() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();

    editor
        .set_image("assets.logoUrl", console.image_encoder(), "logo.png", b"\x89PNG")
        .unwrap();
    editor.commit().unwrap();

    let page = site.storefront.products(Visitor::Admin);
    assert_eq!(
        page.layout.header.logo_url.as_deref(),
        Some("data:image/png;base64,iVBORw==")
    );
    assert_eq!(page.layout.footer.logo_url, page.layout.header.logo_url);
}

#[test]
fn test_upload_into_text_field_rejected() {
    let site = TestSite::new();
    let console = site.login();
    let mut editor = console.config_editor();
    let result = editor.set_image("theme.primaryColor", console.image_encoder(), "logo.png", b"x");
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(!editor.is_dirty());
}

// =============================================================================
// Login / Profile
// =============================================================================

#[test]
fn test_wrong_password_rejected() {
    let site = TestSite::new();
    assert!(site.admin.login(TEST_USERNAME, "senha-errada").is_err());
    assert!(site.admin.login("outro", TEST_PASSWORD).is_err());
}

#[test]
fn test_password_change_applies_to_next_login() {
    let site = TestSite::new();
    let console = site.login();

    let mut profile = console.profile_editor();
    profile.begin_edit();
    profile.set_passwords(
        SecretString::from("n0va-Tinta-88"),
        SecretString::from("n0va-Tinta-99"),
    );
    assert!(matches!(
        console.save_profile(&mut profile),
        Err(AppError::Profile(ProfileError::PasswordMismatch))
    ));

    profile.set_passwords(
        SecretString::from("n0va-Tinta-88"),
        SecretString::from("n0va-Tinta-88"),
    );
    console.save_profile(&mut profile).unwrap();
    console.logout();

    assert!(site.admin.login(TEST_USERNAME, TEST_PASSWORD).is_err());
    assert!(site.admin.login(TEST_USERNAME, "n0va-Tinta-88").is_ok());
}
