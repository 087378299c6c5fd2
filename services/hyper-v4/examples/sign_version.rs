//! Sign a `GET /v1.23/version` request and print it as a curl command.
//!
//! ```shell
//! HYPER_ACCESS_KEY=xxx HYPER_SECRET_KEY=xxx cargo run --example sign_version
//! ```

use anyhow::Result;
use hypersign_core::OsEnv;
use hypersign_hyper_v4::{Config, RequestSigner};
use log::info;

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://us-west-1.hyper.sh/v1.23/version".to_string());

    let mut req = http::Request::new(());
    *req.uri_mut() = url.parse()?;
    let host = req
        .uri()
        .host()
        .ok_or_else(|| anyhow::anyhow!("url must contain host"))?
        .to_string();

    let config = Config::default()
        .from_env(&OsEnv)
        .with_region_from_host(&host);
    info!("signing with region {} and service {}", config.region(), config.service());

    let signer = RequestSigner::from_config(&config);
    let (mut parts, body) = req.into_parts();
    signer.sign_parts(&mut parts, None)?;
    let req = http::Request::from_parts(parts, body);

    println!("curl -v \\");
    for (name, value) in req.headers() {
        println!("  -H \"{}: {}\" \\", name, value.to_str()?);
    }
    println!("  -X {} {}", req.method(), req.uri());
    Ok(())
}
