mod golden;
mod http_request;

use anyhow::Result;
use hypersign_core::time::parse_iso8601;
use hypersign_core::{HeaderSet, StaticEnv};
use hypersign_hyper_v4::{Config, RequestSigner};

/// Fixed signing time used by every recorded vector.
pub const SIGNING_TIME: &str = "20160712T033826Z";
pub const HOST: &str = "us-west-1.hyper.sh";

/// Initialize test environment with the recorded credential.
pub fn init_signing_test() -> Result<RequestSigner> {
    let _ = env_logger::builder().is_test(true).try_init();

    let env: StaticEnv = [
        ("HYPER_ACCESS_KEY", "AKID"),
        ("HYPER_SECRET_KEY", "testsecret"),
    ]
    .into_iter()
    .collect();
    let config = Config::default()
        .from_env(&env)
        .with_region_from_host(HOST);

    Ok(RequestSigner::from_config(&config).with_time(parse_iso8601(SIGNING_TIME)?))
}

/// Split the signature out of the authorization header.
pub fn signature_of(headers: &HeaderSet) -> Result<String> {
    let auth = headers
        .get("authorization")
        .ok_or_else(|| anyhow::anyhow!("authorization header is missing"))?
        .to_str()?;
    let (_, signature) = auth
        .rsplit_once("Signature=")
        .ok_or_else(|| anyhow::anyhow!("signature is missing in {auth}"))?;
    Ok(signature.to_string())
}
