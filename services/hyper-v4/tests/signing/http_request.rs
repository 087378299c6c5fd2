use super::{init_signing_test, signature_of, HOST};
use anyhow::Result;
use bytes::Bytes;
use http::{Method, Request};
use hypersign_core::{OsEnv, SigningRequest};
use hypersign_hyper_v4::{Config, RequestSigner};
use log::debug;
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

#[test]
fn test_sign_http_request() -> Result<()> {
    let signer = init_signing_test()?;
    let body = r#"{"Image":"busybox"}"#;

    let mut req = Request::new(body.to_string());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = format!("https://{HOST}/v1.23/containers/create?name=my%20app").parse()?;
    req.headers_mut()
        .insert("content-type", "application/json".parse()?);
    req.headers_mut()
        .insert("x-hyper-date", "19700101T000000Z".parse()?);

    let (mut parts, body) = req.into_parts();
    signer.sign_parts(&mut parts, Some(Bytes::from(body.clone())))?;
    let req = Request::from_parts(parts, body);
    debug!("signed request: {req:?}");

    let body_digest = hex::encode(Sha256::digest(req.body().as_bytes()));
    assert_eq!(req.headers()["x-hyper-content-sha256"], body_digest.as_str());
    assert_eq!(req.headers()["x-hyper-date"], "20160712T033826Z");
    assert_eq!(req.headers()["host"], HOST);

    let (_, signature) = req.headers()["authorization"]
        .to_str()?
        .rsplit_once("Signature=")
        .expect("signature must exist");
    assert_eq!(
        signature,
        "9c449645d6d49b042449ec38b898ba5bd8fe01ff964a635b117edc012af5fcd8"
    );
    Ok(())
}

#[test]
fn test_sign_http_request_keeps_unrelated_headers() -> Result<()> {
    let signer = init_signing_test()?;

    let mut req = Request::new(());
    *req.uri_mut() = format!("https://{HOST}/v1.23/info").parse()?;
    req.headers_mut().insert("user-agent", "hypersign".parse()?);

    let (mut parts, _) = req.into_parts();
    signer.sign_parts(&mut parts, None)?;

    assert_eq!(parts.headers["user-agent"], "hypersign");
    assert_eq!(parts.headers.len(), 6);
    Ok(())
}

#[test]
fn test_signer_from_os_env() -> Result<()> {
    temp_env::with_vars(
        [
            ("HYPER_ACCESS_KEY", Some("AKID")),
            ("HYPER_SECRET_KEY", Some("testsecret")),
            ("HYPER_REGION", None),
            ("HYPER_SERVICE", None),
        ],
        || -> Result<()> {
            let config = Config::default().from_env(&OsEnv);
            let signer = RequestSigner::from_config(&config)
                .with_time(hypersign_core::time::parse_iso8601(super::SIGNING_TIME)?);

            let headers =
                signer.sign(&SigningRequest::new("GET", HOST)?.with_path("v1.23/version"))?;
            assert_eq!(
                signature_of(&headers)?,
                "cd168a1dc2a9b0b576a617526e0e47646f9a9dd266d32c724b81410d4997dcd0"
            );
            Ok(())
        },
    )
}
