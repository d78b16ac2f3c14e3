use super::*;

#[test]
fn request_url_is_same_origin_under_api_prefix() {
    assert_eq!(request_url("auth/me"), "/api/v1/auth/me");
    assert_eq!(request_url("users/u1/image"), "/api/v1/users/u1/image");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_has_no_transport() {
    let err = BrowserTransport
        .request(Method::Get, "auth/me", None, Some("tok"))
        .await
        .expect_err("no fetch outside the browser");
    assert!(matches!(err, ApiError::Unavailable));

    let err = BrowserTransport.upload("users/u1/image", vec![1, 2], None).await.expect_err("no fetch");
    assert!(matches!(err, ApiError::Unavailable));
}
