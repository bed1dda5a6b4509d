//! Image type sniffing and header-only dimension reading.

use mime_sniffer::MimeTypeSniffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// The sniffed MIME type if the bytes look like an image.
pub fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    // The sniffer only matches lossy WebP; VP8L and VP8X share the container.
    if bytes.get(0..4) == Some(&b"RIFF"[..]) && bytes.get(8..12) == Some(&b"WEBP"[..]) {
        return Some("image/webp");
    }
    let mime = bytes.sniff_mime_type()?;
    let known = ["image/png", "image/jpeg", "image/gif", "image/webp", "image/bmp"];
    known.into_iter().find(|candidate| *candidate == mime)
}

pub fn dimensions(bytes: &[u8]) -> Option<Dimensions> {
    match sniff_image_type(bytes)? {
        "image/png" => png(bytes),
        "image/gif" => gif(bytes),
        "image/jpeg" => jpeg(bytes),
        "image/webp" => webp(bytes),
        "image/bmp" => bmp(bytes),
        _ => None,
    }
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 2)?;
    Some(u32::from(u16::from_be_bytes([b[0], b[1]])))
}

fn le_u16(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 2)?;
    Some(u32::from(u16::from_le_bytes([b[0], b[1]])))
}

fn be_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 4)?;
    Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn le_u24(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 3)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], 0]))
}

fn le_i32(bytes: &[u8], at: usize) -> Option<i32> {
    let b = bytes.get(at..at + 4)?;
    Some(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

// IHDR is always the first chunk.
fn png(bytes: &[u8]) -> Option<Dimensions> {
    if bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    Some(Dimensions {
        width: be_u32(bytes, 16)?,
        height: be_u32(bytes, 20)?,
    })
}

fn gif(bytes: &[u8]) -> Option<Dimensions> {
    Some(Dimensions {
        width: le_u16(bytes, 6)?,
        height: le_u16(bytes, 8)?,
    })
}

fn bmp(bytes: &[u8]) -> Option<Dimensions> {
    Some(Dimensions {
        width: le_i32(bytes, 18)?.unsigned_abs(),
        height: le_i32(bytes, 22)?.unsigned_abs(),
    })
}

fn webp(bytes: &[u8]) -> Option<Dimensions> {
    match bytes.get(12..16)? {
        b"VP8 " => Some(Dimensions {
            width: le_u16(bytes, 26)? & 0x3fff,
            height: le_u16(bytes, 28)? & 0x3fff,
        }),
        b"VP8L" => {
            let b = bytes.get(21..25)?;
            let bits = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            Some(Dimensions {
                width: (bits & 0x3fff) + 1,
                height: ((bits >> 14) & 0x3fff) + 1,
            })
        }
        b"VP8X" => Some(Dimensions {
            width: le_u24(bytes, 24)? + 1,
            height: le_u24(bytes, 27)? + 1,
        }),
        _ => None,
    }
}

// Walks the marker segments up to the first start-of-frame.
fn jpeg(bytes: &[u8]) -> Option<Dimensions> {
    let mut at = 2;
    loop {
        while *bytes.get(at)? != 0xff {
            at += 1;
        }
        while *bytes.get(at)? == 0xff {
            at += 1;
        }
        let marker = *bytes.get(at)?;
        at += 1;
        match marker {
            0xd8 | 0x01 | 0xd0..=0xd7 => continue,
            0xc0..=0xc3 | 0xc5..=0xc7 | 0xc9..=0xcb | 0xcd..=0xcf => {
                return Some(Dimensions {
                    height: be_u16(bytes, at + 3)?,
                    width: be_u16(bytes, at + 5)?,
                });
            }
            _ => at += usize::try_from(be_u16(bytes, at)?).ok()?,
        }
    }
}
