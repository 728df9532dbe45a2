//! Single-line manifest parsing.

use super::ManifestError;
use crate::checksum::Algorithm;

/// One manifest line: `<relative_path> <algorithm> <expected_digest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based line number in the manifest.
    pub line: usize,
    pub relative_path: String,
    pub algorithm: Algorithm,
    /// Expected digest exactly as written; not case-normalized.
    pub expected_digest: String,
}

/// Field separators: Unicode whitespace plus the ASCII information separators
/// FS, GS, RS and US.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split a decoded line on whitespace into an entry.
///
/// Exactly three fields are required, so blank lines are malformed too.
pub fn parse_line(line: usize, text: &str) -> Result<ManifestEntry, ManifestError> {
    let fields: Vec<&str> = text.split(is_separator).filter(|f| !f.is_empty()).collect();
    let &[path, algorithm, digest] = fields.as_slice() else {
        return Err(ManifestError::MalformedLine {
            line,
            found: fields.len(),
        });
    };
    let algorithm = algorithm
        .parse::<Algorithm>()
        .map_err(|e| ManifestError::UnsupportedAlgorithm { line, token: e.0 })?;
    Ok(ManifestEntry {
        line,
        relative_path: path.to_string(),
        algorithm,
        expected_digest: digest.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_spaces() {
        let entry = parse_line(1, "a.txt md5 d41d8cd98f00b204e9800998ecf8427e").unwrap();
        assert_eq!(entry.line, 1);
        assert_eq!(entry.relative_path, "a.txt");
        assert_eq!(entry.algorithm, Algorithm::Md5);
        assert_eq!(entry.expected_digest, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn parse_arbitrary_whitespace() {
        let entry = parse_line(7, "  dir/b.bin\t\tsha1   abc \r").unwrap();
        assert_eq!(entry.line, 7);
        assert_eq!(entry.relative_path, "dir/b.bin");
        assert_eq!(entry.algorithm, Algorithm::Sha1);
        assert_eq!(entry.expected_digest, "abc");
    }

    #[test]
    fn information_separators_split_fields() {
        let entry = parse_line(1, "a\x1fmd5\x1c00").unwrap();
        assert_eq!(entry.relative_path, "a");
        assert_eq!(entry.algorithm, Algorithm::Md5);
        assert_eq!(entry.expected_digest, "00");
        match parse_line(2, "\x1d\x1e\x1f") {
            Err(ManifestError::MalformedLine { found, .. }) => assert_eq!(found, 0),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn parse_keeps_digest_case() {
        let entry = parse_line(1, "x sha256 ABCDEF").unwrap();
        assert_eq!(entry.expected_digest, "ABCDEF");
    }

    #[test]
    fn too_few_fields() {
        match parse_line(3, "a.txt md5") {
            Err(ManifestError::MalformedLine { line, found }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn too_many_fields() {
        match parse_line(2, "my file.txt md5 d41d8cd98f00b204e9800998ecf8427e") {
            Err(ManifestError::MalformedLine { found, .. }) => assert_eq!(found, 4),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_malformed() {
        match parse_line(5, "   ") {
            Err(ManifestError::MalformedLine { line, found }) => {
                assert_eq!(line, 5);
                assert_eq!(found, 0);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_algorithm() {
        match parse_line(4, "a.txt SHA256 e3b0") {
            Err(ManifestError::UnsupportedAlgorithm { line, token }) => {
                assert_eq!(line, 4);
                assert_eq!(token, "SHA256");
            }
            other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn error_messages_name_the_line() {
        let err = parse_line(12, "only-one").unwrap_err();
        assert_eq!(
            err.to_string(),
            "manifest line 12: expected 3 fields (path, algorithm, digest), found 1"
        );
        let err = parse_line(9, "a crc32 00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "manifest line 9: unsupported digest algorithm \"crc32\""
        );
    }
}
