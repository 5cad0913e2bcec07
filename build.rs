use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Writes `APP_METADATA_*` constants into `$OUT_DIR/app_metadata.rs`.
struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};",
            key.to_uppercase(),
            value
        )
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let bytes = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            bytes
        )
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fixed_len(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.resize(len, b'!');
    bytes
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_IV");

    let _ = dotenv();

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "rlw".to_string());
    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &package_name)?;
    app_metadata.write("VERSION", &package_version)?;

    let cargo_toml: Value = toml::from_str(&fs::read_to_string("Cargo.toml")?).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    // The API key cache is encrypted with these; release builds should set them.
    let (encryption_key, encryption_iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != KEY_LEN {
                panic!("ENCRYPTION_KEY must be exactly {} bytes long, got {} bytes", KEY_LEN, key.len());
            }
            if iv.len() != IV_LEN {
                panic!("ENCRYPTION_IV must be exactly {} bytes long, got {} bytes", IV_LEN, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. For production, create a .env file with:");
            println!("cargo:warning=ENCRYPTION_KEY=your_32_byte_key_here!!!!!!!!!");
            println!("cargo:warning=ENCRYPTION_IV=your_16_byte_iv!");
            (
                fixed_len(format!("{}_default_encryption_key_32b", package_name), KEY_LEN),
                fixed_len(format!("{}_iv_16b", package_name), IV_LEN),
            )
        }
    };

    app_metadata.write_bytes("ENCRYPTION_KEY", &encryption_key)?;
    app_metadata.write_bytes("ENCRYPTION_IV", &encryption_iv)?;

    Ok(())
}
