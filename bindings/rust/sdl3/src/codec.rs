// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! String codec for the native boundary
//!
//! SDL speaks NUL-terminated UTF-8. Encoding writes the terminator
//! explicitly; short strings live inline, longer ones in a rented buffer.
//! Empty and whitespace-only text encodes to [`NativeString::Absent`], which
//! crosses the boundary as a null pointer and decodes back to `""`.

use crate::error::{Error, Result};
use crate::pool::{BufferPool, Pooled};

use std::ffi::{c_char, c_void, CStr};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Encoded size (terminator included) up to which bytes are stored inline
pub const INLINE_THRESHOLD: usize = 512;

/// A NUL-terminated string ready to hand to native code
pub enum NativeString {
    /// No string; passed as a null pointer
    Absent,
    /// Stored in place. `len` excludes the terminator.
    Inline {
        bytes: [u8; INLINE_THRESHOLD],
        len: usize,
    },
    /// Stored in a rented buffer, terminator included
    Pooled(Pooled<u8>),
}

impl NativeString {
    /// Pointer to pass across the boundary (null when absent)
    ///
    /// Only valid while `self` is neither moved nor dropped.
    pub fn as_ptr(&self) -> *const c_char {
        match self {
            NativeString::Absent => std::ptr::null(),
            NativeString::Inline { bytes, .. } => bytes.as_ptr().cast(),
            NativeString::Pooled(buf) => buf.as_ptr().cast(),
        }
    }

    /// Encoded bytes without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            NativeString::Absent => &[],
            NativeString::Inline { bytes, len } => &bytes[..*len],
            NativeString::Pooled(buf) => &buf[..buf.len() - 1],
        }
    }

    /// Encoded bytes including the terminator (empty when absent)
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        match self {
            NativeString::Absent => &[],
            NativeString::Inline { bytes, len } => &bytes[..*len + 1],
            NativeString::Pooled(buf) => buf,
        }
    }

    /// The text this was encoded from; absent decodes to `""`
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Byte length without the terminator
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, NativeString::Absent)
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, NativeString::Inline { .. })
    }
}

impl fmt::Debug for NativeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeString::Absent => f.write_str("Absent"),
            NativeString::Inline { .. } => f.debug_tuple("Inline").field(&self.as_str()).finish(),
            NativeString::Pooled(_) => f.debug_tuple("Pooled").field(&self.as_str()).finish(),
        }
    }
}

/// Encode optional text: empty or whitespace-only input becomes `Absent`.
pub fn encode(text: &str, pool: &Arc<BufferPool<u8>>) -> Result<NativeString> {
    if text.trim().is_empty() {
        return Ok(NativeString::Absent);
    }
    encode_required(text, pool)
}

/// Encode text that must reach native code as a non-null pointer
pub fn encode_required(text: &str, pool: &Arc<BufferPool<u8>>) -> Result<NativeString> {
    if let Some(pos) = text.bytes().position(|b| b == 0) {
        return Err(Error::InteriorNul(pos));
    }
    let len = text.len();
    if len < INLINE_THRESHOLD {
        let mut bytes = [0u8; INLINE_THRESHOLD];
        bytes[..len].copy_from_slice(text.as_bytes());
        // bytes[len] is already the terminator
        return Ok(NativeString::Inline { bytes, len });
    }
    let mut buf = pool.rent(len + 1);
    buf.extend_from_slice(text.as_bytes());
    buf.push(0);
    Ok(NativeString::Pooled(buf))
}

/// Decode a native string; null decodes to `""`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// and unmodified for `'a`.
pub unsafe fn decode<'a>(ptr: *const c_char) -> Result<&'a str> {
    if ptr.is_null() {
        return Ok("");
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_str()?)
}

/// Decode a caller-allocated output buffer, stopping at the first NUL
pub fn decode_bytes(bytes: &[u8]) -> Result<&str> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(std::str::from_utf8(&bytes[..end])?)
}

/// Strings decoded from a native pointer list into one rented buffer
///
/// Entries are stored back to back, each followed by a NUL. The buffer goes
/// back to its pool when the list is dropped.
pub struct StringList {
    bytes: Pooled<u8>,
    count: usize,
}

impl StringList {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the entries in native order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        // each entry was validated on the way in, NUL is ASCII
        std::str::from_utf8(&self.bytes)
            .unwrap_or_default()
            .split_terminator('\0')
            .take(self.count)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Copy the entries out of the transient buffer
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl fmt::Debug for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

fn collect_list(entries: &[&CStr], pool: &Arc<BufferPool<u8>>) -> Result<StringList> {
    let total: usize = entries.iter().map(|e| e.to_bytes_with_nul().len()).sum();
    let mut bytes = pool.rent(total);
    for entry in entries {
        let text = entry.to_str()?;
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
    }
    Ok(StringList {
        bytes,
        count: entries.len(),
    })
}

/// Decode a NULL-terminated list of native strings
///
/// Returns `None` when `list` itself is null. The native entries are copied;
/// their memory is never freed here.
///
/// # Safety
///
/// `list` must be null or point to an array of valid NUL-terminated strings
/// ending with a null entry.
pub unsafe fn decode_list(
    list: *const *const c_char,
    pool: &Arc<BufferPool<u8>>,
) -> Result<Option<StringList>> {
    if list.is_null() {
        return Ok(None);
    }
    let mut entries = Vec::new();
    let mut cursor = list;
    loop {
        let entry = unsafe { *cursor };
        if entry.is_null() {
            break;
        }
        entries.push(unsafe { CStr::from_ptr(entry) });
        cursor = unsafe { cursor.add(1) };
    }
    collect_list(&entries, pool).map(Some)
}

/// Decode `count` native strings; null entries are skipped.
///
/// # Safety
///
/// `list` must be null or point to `count` entries, each null or a valid
/// NUL-terminated string.
pub unsafe fn decode_array(
    list: *const *const c_char,
    count: usize,
    pool: &Arc<BufferPool<u8>>,
) -> Result<StringList> {
    if list.is_null() || count == 0 {
        return collect_list(&[], pool);
    }
    let raw = unsafe { std::slice::from_raw_parts(list, count) };
    let entries: Vec<&CStr> = raw
        .iter()
        .filter(|p| !p.is_null())
        .map(|&p| unsafe { CStr::from_ptr(p) })
        .collect();
    collect_list(&entries, pool)
}

/// Decode `count` native strings straight into owned values
///
/// # Safety
///
/// Same contract as [`decode_array`].
pub(crate) unsafe fn decode_array_owned(
    list: *const *const c_char,
    count: usize,
) -> Result<Vec<String>> {
    if list.is_null() || count == 0 {
        return Ok(Vec::new());
    }
    let raw = unsafe { std::slice::from_raw_parts(list, count) };
    raw.iter()
        .filter(|p| !p.is_null())
        .map(|&p| Ok(unsafe { CStr::from_ptr(p) }.to_str()?.to_owned()))
        .collect()
}

/// Platform wide-character codec (`wchar_t` strings)
pub trait WideCodec: Send + Sync {
    /// Bytes per code unit
    fn unit_size(&self) -> usize;

    /// Encode to native-endian code units plus a zero terminator.
    /// `None` stays `None` (a null pointer at the boundary).
    fn encode(&self, text: Option<&str>) -> Option<Vec<u8>>;

    /// Decode a zero-terminated wide string; null decodes to `None`.
    /// Ill-formed sequences become U+FFFD.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a readable, zero-terminated sequence of
    /// code units. It need not be aligned.
    unsafe fn decode(&self, ptr: *const c_void) -> Option<String>;
}

/// UTF-16 `wchar_t` (Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Codec;

/// UTF-32 `wchar_t` (everything else)
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf32Codec;

impl WideCodec for Utf16Codec {
    fn unit_size(&self) -> usize {
        2
    }

    fn encode(&self, text: Option<&str>) -> Option<Vec<u8>> {
        let text = text?;
        let mut out = Vec::with_capacity((text.len() + 1) * 2);
        for unit in text.encode_utf16().chain(std::iter::once(0)) {
            out.extend_from_slice(&unit.to_ne_bytes());
        }
        Some(out)
    }

    unsafe fn decode(&self, ptr: *const c_void) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let mut units = Vec::new();
        let mut cursor = ptr.cast::<u16>();
        loop {
            let unit = unsafe { cursor.read_unaligned() };
            if unit == 0 {
                break;
            }
            units.push(unit);
            cursor = unsafe { cursor.add(1) };
        }
        Some(String::from_utf16_lossy(&units))
    }
}

impl WideCodec for Utf32Codec {
    fn unit_size(&self) -> usize {
        4
    }

    fn encode(&self, text: Option<&str>) -> Option<Vec<u8>> {
        let text = text?;
        let mut out = Vec::with_capacity((text.chars().count() + 1) * 4);
        for unit in text.chars().map(u32::from).chain(std::iter::once(0)) {
            out.extend_from_slice(&unit.to_ne_bytes());
        }
        Some(out)
    }

    unsafe fn decode(&self, ptr: *const c_void) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let mut out = String::new();
        let mut cursor = ptr.cast::<u32>();
        loop {
            let unit = unsafe { cursor.read_unaligned() };
            if unit == 0 {
                break;
            }
            out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
            cursor = unsafe { cursor.add(1) };
        }
        Some(out)
    }
}

static UTF16: Utf16Codec = Utf16Codec;
static UTF32: Utf32Codec = Utf32Codec;

/// The codec matching this platform's `wchar_t`, chosen once per process
pub fn wide_codec() -> &'static dyn WideCodec {
    static CODEC: OnceLock<&'static dyn WideCodec> = OnceLock::new();
    *CODEC.get_or_init(|| {
        if std::mem::size_of::<libc::wchar_t>() == 2 {
            &UTF16
        } else {
            &UTF32
        }
    })
}
