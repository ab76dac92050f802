/// Path-quirk workarounds: legacy 8.3 short names and extended-length
/// prefixes.
///
/// Both only exist on Windows. Elsewhere the functions return `None` and the
/// scanner's fallbacks become no-ops.
use std::path::{Path, PathBuf};

/// Prefix that lifts the `MAX_PATH` ceiling for Win32 file APIs.
pub const EXTENDED_PREFIX: &str = r"\\?\";
const EXTENDED_UNC_PREFIX: &str = r"\\?\UNC\";

/// Resolve the 8.3 short form of `path` via `GetShortPathNameW`.
///
/// Returns `None` when the API fails, when short names are disabled on the
/// volume, or when the short form is identical to the input.
#[cfg(windows)]
pub fn short_path(path: &Path) -> Option<PathBuf> {
    use std::ffi::OsString;
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    use windows::core::PCWSTR;
    use windows::Win32::Storage::FileSystem::GetShortPathNameW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    // First call reports the required buffer length (including the NUL).
    let needed = unsafe { GetShortPathNameW(PCWSTR(wide.as_ptr()), None) };
    if needed == 0 {
        tracing::debug!("GetShortPathNameW failed for {}", path.display());
        return None;
    }

    let mut buffer = vec![0u16; needed as usize];
    let written = unsafe { GetShortPathNameW(PCWSTR(wide.as_ptr()), Some(&mut buffer)) };
    if written == 0 || written as usize >= buffer.len() {
        return None;
    }

    let short = PathBuf::from(OsString::from_wide(&buffer[..written as usize]));
    (short.as_path() != path).then_some(short)
}

#[cfg(not(windows))]
pub fn short_path(_path: &Path) -> Option<PathBuf> {
    None
}

/// Build the `\\?\` form of an absolute path.
///
/// UNC shares (`\\server\share`) become `\\?\UNC\server\share`. Relative and
/// already-prefixed paths yield `None`.
#[cfg(windows)]
pub fn extended_length_path(path: &Path) -> Option<PathBuf> {
    prefixed(&path.to_string_lossy()).map(PathBuf::from)
}

#[cfg(not(windows))]
pub fn extended_length_path(_path: &Path) -> Option<PathBuf> {
    None
}

/// String-level prefixing shared by the Windows implementation and tests.
#[cfg_attr(not(windows), allow(dead_code))]
fn prefixed(raw: &str) -> Option<String> {
    if raw.starts_with(EXTENDED_PREFIX) {
        return None;
    }
    if let Some(share) = raw.strip_prefix(r"\\") {
        return Some(format!("{EXTENDED_UNC_PREFIX}{share}"));
    }
    let bytes = raw.as_bytes();
    let is_drive_absolute = bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && bytes[2] == b'\\';
    is_drive_absolute.then(|| format!("{EXTENDED_PREFIX}{raw}"))
}
