//! Content-type sniffing from the leading bytes of a file.
//!
//! Signatures are checked in table order against at most [`SNIFF_LEN`]
//! bytes. When none match, the sample is classified as plain text or opaque
//! binary by looking for control bytes that never appear in text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Number of leading bytes considered when sniffing.
pub const SNIFF_LEN: usize = 512;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const OCTET_STREAM: &str = "application/octet-stream";

enum Signature {
    /// Bytes must equal the pattern at offset 0.
    Exact(&'static [u8], &'static str),
    /// `data[i] & mask[i] == pat[i]`, optionally after leading whitespace.
    Masked {
        mask: &'static [u8],
        pat: &'static [u8],
        skip_ws: bool,
        ct: &'static str,
    },
    /// Case-insensitive tag after leading whitespace, closed by ' ' or '>'.
    Html(&'static [u8]),
    /// ISO base media file with an `mp4` brand in its `ftyp` box.
    Mp4,
}

const HTML: &str = "text/html; charset=utf-8";

static SIGNATURES: &[Signature] = &[
    Signature::Html(b"<!DOCTYPE HTML"),
    Signature::Html(b"<HTML"),
    Signature::Html(b"<HEAD"),
    Signature::Html(b"<SCRIPT"),
    Signature::Html(b"<IFRAME"),
    Signature::Html(b"<H1"),
    Signature::Html(b"<DIV"),
    Signature::Html(b"<FONT"),
    Signature::Html(b"<TABLE"),
    Signature::Html(b"<A"),
    Signature::Html(b"<STYLE"),
    Signature::Html(b"<TITLE"),
    Signature::Html(b"<B"),
    Signature::Html(b"<BODY"),
    Signature::Html(b"<BR"),
    Signature::Html(b"<P"),
    Signature::Html(b"<!--"),
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\xFF",
        pat: b"<?xml",
        skip_ws: true,
        ct: "text/xml; charset=utf-8",
    },
    Signature::Exact(b"%PDF-", "application/pdf"),
    Signature::Exact(b"%!PS-Adobe-", "application/postscript"),
    // Byte order marks.
    Signature::Masked {
        mask: b"\xFF\xFF\x00\x00",
        pat: b"\xFE\xFF\x00\x00",
        skip_ws: false,
        ct: "text/plain; charset=utf-16be",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\x00\x00",
        pat: b"\xFF\xFE\x00\x00",
        skip_ws: false,
        ct: "text/plain; charset=utf-16le",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\x00",
        pat: b"\xEF\xBB\xBF\x00",
        skip_ws: false,
        ct: TEXT_PLAIN,
    },
    // Images.
    Signature::Exact(b"\x00\x00\x01\x00", "image/x-icon"),
    Signature::Exact(b"\x00\x00\x02\x00", "image/x-icon"),
    Signature::Exact(b"BM", "image/bmp"),
    Signature::Exact(b"GIF87a", "image/gif"),
    Signature::Exact(b"GIF89a", "image/gif"),
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF",
        pat: b"RIFF\x00\x00\x00\x00WEBPVP",
        skip_ws: false,
        ct: "image/webp",
    },
    Signature::Exact(b"\x89PNG\x0D\x0A\x1A\x0A", "image/png"),
    Signature::Exact(b"\xFF\xD8\xFF", "image/jpeg"),
    // Audio and video.
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pat: b"FORM\x00\x00\x00\x00AIFF",
        skip_ws: false,
        ct: "audio/aiff",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF",
        pat: b"ID3",
        skip_ws: false,
        ct: "audio/mpeg",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\xFF",
        pat: b"OggS\x00",
        skip_ws: false,
        ct: "application/ogg",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF",
        pat: b"MThd\x00\x00\x00\x06",
        skip_ws: false,
        ct: "audio/midi",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pat: b"RIFF\x00\x00\x00\x00AVI ",
        skip_ws: false,
        ct: "video/avi",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pat: b"RIFF\x00\x00\x00\x00WAVE",
        skip_ws: false,
        ct: "audio/wave",
    },
    Signature::Mp4,
    Signature::Exact(b"\x1A\x45\xDF\xA3", "video/webm"),
    // Fonts.
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF",
        pat: b"\x00\x01\x00\x00",
        skip_ws: false,
        ct: "font/ttf",
    },
    Signature::Exact(b"OTTO", "font/otf"),
    Signature::Exact(b"ttcf", "font/collection"),
    Signature::Exact(b"wOFF", "font/woff"),
    Signature::Exact(b"wOF2", "font/woff2"),
    // Archives.
    Signature::Exact(b"\x1F\x8B\x08", "application/x-gzip"),
    Signature::Exact(b"PK\x03\x04", "application/zip"),
    Signature::Exact(b"Rar!\x1A\x07\x00", "application/x-rar-compressed"),
    Signature::Exact(b"Rar!\x1A\x07\x01\x00", "application/x-rar-compressed"),
    Signature::Exact(b"\x00\x61\x73\x6D", "application/wasm"),
];

fn is_ws(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

/// Bytes that do not occur in text files.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

impl Signature {
    fn matches(&self, data: &[u8], first_non_ws: usize) -> Option<&'static str> {
        match *self {
            Signature::Exact(sig, ct) => data.starts_with(sig).then_some(ct),
            Signature::Masked {
                mask,
                pat,
                skip_ws,
                ct,
            } => {
                let data = if skip_ws { &data[first_non_ws..] } else { data };
                if data.len() < pat.len() {
                    return None;
                }
                let hit = pat
                    .iter()
                    .zip(mask)
                    .zip(data)
                    .all(|((&p, &m), &d)| d & m == p);
                hit.then_some(ct)
            }
            Signature::Html(tag) => {
                let data = &data[first_non_ws..];
                if data.len() < tag.len() + 1 {
                    return None;
                }
                let same = tag.iter().zip(data).all(|(&t, &d)| {
                    // Fold ASCII letters to upper case; the tags are upper case.
                    let d = if t.is_ascii_uppercase() { d & 0xDF } else { d };
                    t == d
                });
                (same && matches!(data[tag.len()], b' ' | b'>')).then_some(HTML)
            }
            Signature::Mp4 => sniff_mp4(data),
        }
    }
}

fn sniff_mp4(data: &[u8]) -> Option<&'static str> {
    if data.len() < 12 {
        return None;
    }
    let box_size = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if box_size < 12 || data.len() < box_size || box_size % 4 != 0 {
        return None;
    }
    if &data[4..8] != b"ftyp" {
        return None;
    }
    // Major brand at 8, minor version at 12, compatible brands after.
    (8..box_size)
        .step_by(4)
        .filter(|&st| st != 12)
        .any(|st| &data[st..st + 3] == b"mp4")
        .then_some("video/mp4")
}

/// Classify a sample of leading bytes. An empty sample is plain text.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];
    let first_non_ws = data.iter().position(|&b| !is_ws(b)).unwrap_or(data.len());

    SIGNATURES
        .iter()
        .find_map(|sig| sig.matches(data, first_non_ws))
        .unwrap_or_else(|| {
            if data[first_non_ws..].iter().copied().any(is_binary_byte) {
                OCTET_STREAM
            } else {
                TEXT_PLAIN
            }
        })
}

/// Sniff the MIME type of the file at `path` from its first
/// [`SNIFF_LEN`] bytes.
///
/// Open and read errors propagate; an empty file is reported as
/// [`FsOpError::EmptyFile`].
pub fn filetype<P: AsRef<Path>>(path: P) -> Result<String, FsOpError> {
    let p = path.as_ref();
    let file = File::open(p)?;
    let mut buf = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(FsOpError::EmptyFile(p.to_path_buf()));
    }
    Ok(detect_content_type(&buf).to_string())
}
