use std::fs::exists;

use crate::config::HttpConfig;

// the app is a single page, so every unknown path is answered with index.html;
// without it the server can only hand out 404s
pub fn doc_root_has_index(http: &HttpConfig) -> anyhow::Result<()> {
    if !http.doc_root.is_absolute() {
        return Err(anyhow::Error::msg(format!(
            "doc_root must be an absolute path, got {:?}",
            http.doc_root
        )));
    }

    let index = http.doc_root.join("index.html");

    if !exists(&index)? {
        return Err(anyhow::Error::msg(format!(
            "doc_root {:?} does not contain index.html",
            http.doc_root
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("albums-checks-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn relative_doc_root_is_rejected() {
        let http = HttpConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: PathBuf::from("dist"),
        };

        assert!(doc_root_has_index(&http).is_err());
    }

    #[test]
    fn missing_index_is_rejected() {
        let http = HttpConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: scratch_dir("empty"),
        };

        assert!(doc_root_has_index(&http).is_err());
    }

    #[test]
    fn doc_root_with_index_passes() {
        let dir = scratch_dir("index");
        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();

        let http = HttpConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: dir,
        };

        assert!(doc_root_has_index(&http).is_ok());
    }
}
