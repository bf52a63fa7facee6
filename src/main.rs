use anyhow::{anyhow, Result};
use p256::pkcs8::{EncodePrivateKey, EncodePublicKey};
use p256::SecretKey;
use rand::rngs::OsRng;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vapid_keygen::config::Config;
use vapid_keygen::extract::{extract_private_key, extract_public_key, to_base64url};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Keys go to stdout so they can be piped; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    let secret = SecretKey::random(&mut OsRng);
    let spki = secret
        .public_key()
        .to_public_key_der()
        .map_err(|e| anyhow!("SPKI encoding failed: {e}"))?;
    let pkcs8 = secret
        .to_pkcs8_der()
        .map_err(|e| anyhow!("PKCS#8 encoding failed: {e}"))?;
    debug!(
        "generated P-256 key pair (SPKI {} bytes, PKCS#8 {} bytes)",
        spki.as_bytes().len(),
        pkcs8.as_bytes().len()
    );

    let public_raw = extract_public_key(spki.as_bytes())?;
    let private_raw = extract_private_key(pkcs8.as_bytes())?;

    let public_b64 = to_base64url(&public_raw);
    let private_b64 = to_base64url(&private_raw);
    let subject = &config.vapid_subject;

    let rule = "=".repeat(80);
    println!("{rule}");
    println!("VAPID KEYS");
    println!("{rule}");
    println!();
    println!("Public Key (base64url):");
    println!("{public_b64}");
    println!();
    println!("Private Key (base64url):");
    println!("{private_b64}");
    println!();
    println!("Add these to your .env file:");
    println!("VAPID_PUBLIC_KEY={public_b64}");
    println!("VAPID_PRIVATE_KEY={private_b64}");
    println!("VAPID_SUBJECT={subject}");
    println!();
    println!("Add to application.properties:");
    println!("webpush.vapid.public-key=${{VAPID_PUBLIC_KEY:{public_b64}}}");
    println!("webpush.vapid.private-key=${{VAPID_PRIVATE_KEY:{private_b64}}}");
    println!("webpush.vapid.subject=${{VAPID_SUBJECT:{subject}}}");

    Ok(())
}
