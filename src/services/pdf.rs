//! PDF discovery
//!
//! Two small capabilities: locating the `<stem>.pdf` sibling of a source
//! file, and probing which PDF backend this build can actually use. The
//! probe runs once at startup and the result is treated as a capability,
//! never persisted.

use std::io::Read;
use std::path::{Path, PathBuf};

/// Derive `<dir>/<stem>.pdf` for `source` and return it only when a file
/// exists there. Filesystem errors are swallowed and logged at debug
/// severity; callers only distinguish "found" from "not found".
pub fn find_sibling_pdf(source: &Path) -> Option<PathBuf> {
    let stem = source.file_stem()?;

    // A .pdf source would be its own sibling
    if source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    {
        return None;
    }

    let sibling = source.with_file_name(format!("{}.pdf", stem.to_string_lossy()));

    match std::fs::metadata(&sibling) {
        Ok(meta) if meta.is_file() => Some(sibling),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(path = %sibling.display(), %err, "no pdf sibling");
            None
        }
    }
}

/// Which backend the probe resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfBackend {
    /// Full read/write document support via lopdf
    Lopdf,
    /// Fallback: only the `%PDF-` magic sniff, enough to verify siblings
    HeaderOnly,
}

impl PdfBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfBackend::Lopdf => "lopdf",
            PdfBackend::HeaderOnly => "header-only",
        }
    }
}

/// Resolved PDF capability. Constructed once by the application root via
/// [`PdfSupport::detect`] and handed out through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfSupport {
    backend: Option<PdfBackend>,
}

impl PdfSupport {
    /// Probe the primary backend, fall back to the header sniffer, or
    /// mark PDF support unavailable. The lopdf probe round-trips a
    /// minimal in-memory document so a broken build surfaces here rather
    /// than on first use.
    pub fn detect() -> Self {
        if probe_lopdf() {
            tracing::debug!("pdf support: lopdf backend");
            return Self {
                backend: Some(PdfBackend::Lopdf),
            };
        }

        #[cfg(feature = "pdf")]
        tracing::warn!("lopdf probe failed; falling back to header sniffing");

        Self {
            backend: Some(PdfBackend::HeaderOnly),
        }
    }

    /// The unavailable marker.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn available(&self) -> bool {
        self.backend.is_some()
    }

    /// Whether documents can be opened (not just sniffed).
    pub fn can_read(&self) -> bool {
        matches!(self.backend, Some(PdfBackend::Lopdf))
    }

    pub fn backend(&self) -> Option<PdfBackend> {
        self.backend
    }

    /// Check that `path` holds something PDF-shaped, using the strongest
    /// probe the resolved backend offers.
    pub fn verify(&self, path: &Path) -> bool {
        match self.backend {
            #[cfg(feature = "pdf")]
            Some(PdfBackend::Lopdf) => lopdf::Document::load(path).is_ok(),
            #[cfg(not(feature = "pdf"))]
            Some(PdfBackend::Lopdf) => false,
            Some(PdfBackend::HeaderOnly) => sniff_pdf_header(path),
            None => false,
        }
    }
}

/// Read the first bytes of `path` and compare against the PDF magic.
/// Errors count as "not a PDF".
pub fn sniff_pdf_header(path: &Path) -> bool {
    let mut magic = [0u8; 5];
    match std::fs::File::open(path).and_then(|mut f| f.read_exact(&mut magic)) {
        Ok(()) => &magic == b"%PDF-",
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "pdf header sniff failed");
            false
        }
    }
}

#[cfg(feature = "pdf")]
fn probe_lopdf() -> bool {
    use lopdf::{dictionary, Document, Object};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    if doc.save_to(&mut buffer).is_err() {
        return false;
    }
    Document::load_mem(&buffer).is_ok()
}

#[cfg(not(feature = "pdf"))]
fn probe_lopdf() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sibling_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.docx");
        let sibling = dir.path().join("report.pdf");
        fs::write(&source, b"doc").unwrap();
        fs::write(&sibling, b"%PDF-1.4").unwrap();

        assert_eq!(find_sibling_pdf(&source), Some(sibling));
    }

    #[test]
    fn test_sibling_absent() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.docx");
        fs::write(&source, b"doc").unwrap();

        assert_eq!(find_sibling_pdf(&source), None);
    }

    #[test]
    fn test_unreadable_directory_is_not_found_not_a_failure() {
        // The source's directory does not exist at all; the metadata
        // error must be swallowed, not surfaced
        let source = Path::new("/refile-no-such-dir-xyz/report.docx");
        assert_eq!(find_sibling_pdf(source), None);
    }

    #[test]
    fn test_pdf_source_has_no_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.pdf");
        fs::write(&source, b"%PDF-1.4").unwrap();

        assert_eq!(find_sibling_pdf(&source), None);
    }

    #[test]
    fn test_directory_named_like_sibling_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.docx");
        fs::write(&source, b"doc").unwrap();
        fs::create_dir(dir.path().join("report.pdf")).unwrap();

        assert_eq!(find_sibling_pdf(&source), None);
    }

    #[test]
    fn test_sniff_pdf_header() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.pdf");
        let bad = dir.path().join("b.pdf");
        fs::write(&good, b"%PDF-1.7 rest").unwrap();
        fs::write(&bad, b"plain text").unwrap();

        assert!(sniff_pdf_header(&good));
        assert!(!sniff_pdf_header(&bad));
        assert!(!sniff_pdf_header(&dir.path().join("missing.pdf")));
    }

    #[test]
    fn test_unavailable_marker() {
        let support = PdfSupport::unavailable();
        assert!(!support.available());
        assert!(!support.can_read());
        assert!(support.backend().is_none());
        assert!(!support.verify(Path::new("/tmp/whatever.pdf")));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_detect_resolves_lopdf() {
        let support = PdfSupport::detect();
        assert!(support.available());
        assert_eq!(support.backend(), Some(PdfBackend::Lopdf));
        assert!(support.can_read());
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_detect_falls_back_to_header_sniffer() {
        let support = PdfSupport::detect();
        assert!(support.available());
        assert_eq!(support.backend(), Some(PdfBackend::HeaderOnly));
        assert!(!support.can_read());
    }
}
