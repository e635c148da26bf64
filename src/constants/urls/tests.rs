use super::*;

#[test]
fn test_role_urls_cover_every_role() {
    let urls = role_urls();
    assert_eq!(urls.len(), ROLES.len());
    assert_eq!(urls[0].0, "prod");
    assert_eq!(urls[1].0, "stage1");
}

#[test]
fn test_stage1_url() {
    assert_eq!(
        versions_url("stage1"),
        "https://puppetdoc.anytype.io/api/v1/stage1-any-sync-compatible-versions/"
    );
}

#[test]
fn test_connect_budget_fits_inside_request_budget() {
    assert!(CONNECT_TIMEOUT < REQUEST_TIMEOUT);
}
