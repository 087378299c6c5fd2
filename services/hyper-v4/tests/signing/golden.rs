use super::{init_signing_test, signature_of, HOST};
use anyhow::Result;
use hypersign_core::SigningRequest;
use pretty_assertions::assert_eq;

/// (name, request_builder, signature)
type Vector = (&'static str, fn() -> Result<SigningRequest>, &'static str);

fn vectors() -> Vec<Vector> {
    vec![
        (
            "version",
            version_request,
            "cd168a1dc2a9b0b576a617526e0e47646f9a9dd266d32c724b81410d4997dcd0",
        ),
        (
            "list_containers",
            list_containers_request,
            "ffe8f50ade0af19780c0dd943a127d02ba0491996b1d93a964b21c155f5a06ba",
        ),
        (
            "create_container",
            create_container_request,
            "9c449645d6d49b042449ec38b898ba5bd8fe01ff964a635b117edc012af5fcd8",
        ),
    ]
}

fn version_request() -> Result<SigningRequest> {
    Ok(SigningRequest::new("GET", HOST)?.with_path("v1.23/version"))
}

fn list_containers_request() -> Result<SigningRequest> {
    Ok(SigningRequest::new("GET", HOST)?
        .with_path("v1.23/containers/json")
        .with_query("all", "true"))
}

fn create_container_request() -> Result<SigningRequest> {
    Ok(SigningRequest::new("POST", HOST)?
        .with_path("v1.23/containers/create")
        .with_query("name", "my app")
        .with_header("Content-Type", "application/json")?
        .with_body(r#"{"Image":"busybox"}"#))
}

#[test]
fn test_recorded_vectors() -> Result<()> {
    let signer = init_signing_test()?;

    for (name, req, expected) in vectors() {
        let headers = signer.sign(&req()?)?;
        assert_eq!(signature_of(&headers)?, expected, "{name} signature mismatch");
    }
    Ok(())
}

#[test]
fn test_authorization_format() -> Result<()> {
    let signer = init_signing_test()?;
    let headers = signer.sign(&version_request()?)?;

    assert_eq!(
        headers.get("authorization").unwrap().to_str()?,
        "HYPER-HMAC-SHA256 Credential=AKID/20160712/us-west-1/hyper/hyper_request, \
         SignedHeaders=content-type;host;x-hyper-content-sha256;x-hyper-date, \
         Signature=cd168a1dc2a9b0b576a617526e0e47646f9a9dd266d32c724b81410d4997dcd0"
    );
    Ok(())
}
