//! Upload previews: file list entries, size labels, icons and data URLs.
//!
//! The file contents never leave the page. A generic upload only keeps the
//! name and size; an image upload is turned into a `data:` URL for the
//! preview and dropped when the next image replaces it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Glyph shown for extensions missing from [`FILE_ICONS`]
pub const DEFAULT_FILE_ICON: &str = "📎";

/// Icon lookup keyed by lowercase extension
pub const FILE_ICONS: &[(&str, &str)] = &[
    ("pdf", "📄"),
    ("doc", "📝"),
    ("docx", "📝"),
    ("xls", "📊"),
    ("xlsx", "📊"),
    ("ppt", "📊"),
    ("pptx", "📊"),
    ("zip", "📦"),
    ("rar", "📦"),
    ("jpg", "🖼️"),
    ("jpeg", "🖼️"),
    ("png", "🖼️"),
    ("gif", "🖼️"),
    ("cad", "🔧"),
    ("dwg", "🔧"),
    ("step", "🔧"),
    ("stp", "🔧"),
    ("txt", "📄"),
    ("csv", "📊"),
];

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Lowercased text after the last `.`, if the name has one
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Icon glyph for a file name, case-insensitive on the extension
pub fn file_icon(name: &str) -> &'static str {
    extension(name)
        .and_then(|ext| {
            FILE_ICONS
                .iter()
                .find(|(key, _)| *key == ext)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(DEFAULT_FILE_ICON)
}

/// Human-readable size with a 1024 base, rounded to two decimals.
///
/// ```
/// use folio_core::upload::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut scale = 0;
    let mut divisor = 1u64;
    while scale < SIZE_UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        scale += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[scale])
}

/// MIME type used for an image preview, derived from the extension
pub fn image_mime(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Inline base64 `data:` URL usable directly as an image source
pub fn data_url(name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(name), STANDARD.encode(bytes))
}

/// Identifier for one row in the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u64);

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// A selected file as displayed in the list
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub icon: String,
    pub size_label: String,
}

impl UploadedFile {
    pub fn new(id: FileId, name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            id,
            icon: file_icon(&name).to_string(),
            size_label: format_file_size(size),
            name,
            size,
        }
    }
}

/// Result of [`FileList::add_readable`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub added: Vec<FileId>,
    /// Names left out because their size was unreadable
    pub skipped: Vec<String>,
}

/// Ordered list of uploaded files; each entry is removable on its own.
///
/// Ids are never reused, so re-selecting a file that was removed creates a
/// fresh entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileList {
    entries: Vec<UploadedFile>,
    next_id: u64,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry per `(name, size)` in selection order.
    ///
    /// Returns the ids assigned to the batch.
    pub fn add_batch<I, S>(&mut self, files: I) -> Vec<FileId>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        files
            .into_iter()
            .map(|(name, size)| {
                let id = FileId(self.next_id);
                self.next_id += 1;
                self.entries.push(UploadedFile::new(id, name, size));
                id
            })
            .collect()
    }

    /// Like [`Self::add_batch`], but entries whose size could not be read
    /// are left out instead of listed as empty files
    pub fn add_readable<I, S>(&mut self, files: I) -> BatchOutcome
    where
        I: IntoIterator<Item = (S, Option<u64>)>,
        S: Into<String>,
    {
        let mut readable: Vec<(String, u64)> = Vec::new();
        let mut skipped = Vec::new();
        for (name, size) in files {
            match size {
                Some(size) => readable.push((name.into(), size)),
                None => skipped.push(name.into()),
            }
        }
        BatchOutcome {
            added: self.add_batch(readable),
            skipped,
        }
    }

    /// Remove exactly the entry with `id`, leaving its siblings untouched
    pub fn remove(&mut self, id: FileId) -> Option<UploadedFile> {
        let index = self.entries.iter().position(|f| f.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[UploadedFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
