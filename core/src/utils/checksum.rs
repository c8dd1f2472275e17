use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use sha1::{Digest, Sha1};

const BUF_SIZE: usize = 8 * 1024;

/// sha1 of a byte slice as lowercase hex
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// sha1 of a file as lowercase hex, read in fixed-size chunks
pub fn sha1_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// published checksums are hex too, but casing is not guaranteed
pub fn matches(digest: &str, published: &str) -> bool {
    digest.eq_ignore_ascii_case(published)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn sha1_hex_known_vectors() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            sha1_hex(b"hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn file_digest_is_chunk_size_independent() {
        // larger than BUF_SIZE so the chunked path actually loops
        let data = vec![0xabu8; BUF_SIZE * 3 + 17];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();

        assert_eq!(sha1_file(file.path()).unwrap(), sha1_hex(&data));
    }

    #[test]
    fn matches_ignores_case() {
        assert!(matches(
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d",
            "AAF4C61DDCC5E8A2DABEDE0F3B482CD9AEA9434D"
        ));
        assert!(!matches(
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d",
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        ));
    }
}
