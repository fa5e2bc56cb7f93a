use crate::prelude::*;

use serde::Deserialize;
use std::path::Path;

/// Layout of a `priv_validator.json`: keys are `[type, hex]` pairs.
#[derive(Deserialize)]
struct PrivValidatorFile {
    address: Address,
    pub_key: (serde_json::Value, String),
    priv_key: (serde_json::Value, String),
}

pub fn load_key_material(path: impl AsRef<Path>) -> Result<KeyMaterial, ConfigError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::KeyFileUnreadable {
            path: path.to_path_buf(),
            underlying: e.to_string(),
        })?;
    let file: PrivValidatorFile =
        serde_json::from_str(&contents).map_err(|e| ConfigError::KeyFileMalformed {
            path: path.to_path_buf(),
            underlying: e.to_string(),
        })?;
    info!("Loaded key material for {} from {}", file.address, path.display());
    Ok(KeyMaterial::builder()
        .address(file.address)
        .public_key(file.pub_key.1)
        .private_key(file.priv_key.1)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn takes_hex_part_of_typed_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "address": "37236DF251AB70022B1DA351F08A20FB52443E37",
                "pub_key": [1, "CB3688B7561D488A2A4834E1AEE9398BEF94844D8BDBBCA980C11E3654A45906"],
                "priv_key": [1, "6B72D45EB65F619F11CE580C8CAED9E0BADC774E9C9C334687A65DCBAD2C4151CB3688B7561D488A2A4834E1AEE9398BEF94844D8BDBBCA980C11E3654A45906"],
                "last_height": 0
            }}"#
        )
        .unwrap();

        let keys = load_key_material(file.path()).unwrap();

        assert_eq!(
            keys.address(),
            &Address::from("37236DF251AB70022B1DA351F08A20FB52443E37")
        );
        assert_eq!(
            keys.public_key(),
            "CB3688B7561D488A2A4834E1AEE9398BEF94844D8BDBBCA980C11E3654A45906"
        );
        assert!(keys.private_key().starts_with("6B72D45E"));
    }

    #[test]
    fn untyped_key_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "address": "A", "pub_key": "CB36", "priv_key": [1, "6B72"] }}"#
        )
        .unwrap();
        assert!(matches!(
            load_key_material(file.path()),
            Err(ConfigError::KeyFileMalformed { .. })
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        assert!(matches!(
            load_key_material("/definitely/not/here/priv_validator.json"),
            Err(ConfigError::KeyFileUnreadable { .. })
        ));
    }
}
