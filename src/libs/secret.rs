//! Encrypted on-disk cache for the tracker API key.
//!
//! The key is never written to the config file in clear text. When it is not
//! configured, the user is prompted once and the answer is stored AES-256-CBC
//! encrypted and base64 encoded in the data directory. The cipher key and iv
//! are embedded at build time (see `build.rs`).

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(storage: &DataStorage, secret_name: &str, prompt: &str) -> Result<Self> {
        Ok(Self {
            prompt: prompt.to_owned(),
            secret_file_path: storage.get_path(secret_name)?,
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        })
    }

    /// The cached secret, if one exists and decrypts.
    pub fn get(&self) -> Option<String> {
        if !self.secret_file_path.exists() {
            return None;
        }
        match self.decrypt() {
            Ok(secret) => Some(secret),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.secret_file_path.display(), "ignoring unreadable secret cache");
                None
            }
        }
    }

    pub fn get_or_prompt(&self) -> Result<String> {
        match self.get() {
            Some(secret) => Ok(secret),
            None => self.prompt(),
        }
    }

    /// Asks for the secret with hidden input and caches the answer.
    pub fn prompt(&self) -> Result<String> {
        let secret = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .allow_empty_password(true)
            .interact()?;
        self.store(&secret)?;
        Ok(secret)
    }

    pub fn store(&self, secret: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(secret.as_bytes()));

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.secret_file_path, encoded)?;
        Ok(())
    }

    /// Drops the cached secret so the next run prompts again.
    pub fn forget(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        Ok(String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?)
    }
}
