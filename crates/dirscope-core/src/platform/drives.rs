/// Drive enumeration for the directory picker.
///
/// Windows reports logical drive letters (`"C:"`); other hosts have a single
/// root.
use std::path::PathBuf;

/// Drive reported when enumeration fails on Windows.
#[cfg(windows)]
const FALLBACK_DRIVE: &str = "C:";

/// List the drive roots a user can start browsing from.
#[cfg(windows)]
pub fn list_drives() -> Vec<String> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::Storage::FileSystem::GetLogicalDriveStringsW;

    // GetLogicalDriveStringsW returns null-separated drive root strings.
    let mut buffer = [0u16; 256];
    let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };

    if len == 0 || len as usize > buffer.len() {
        tracing::warn!("GetLogicalDriveStringsW returned {len}; using {FALLBACK_DRIVE}");
        return vec![FALLBACK_DRIVE.to_string()];
    }

    let full = OsString::from_wide(&buffer[..len as usize]);
    let drives = parse_drive_strings(&full.to_string_lossy());
    if drives.is_empty() {
        vec![FALLBACK_DRIVE.to_string()]
    } else {
        drives
    }
}

#[cfg(not(windows))]
pub fn list_drives() -> Vec<String> {
    vec![std::path::MAIN_SEPARATOR.to_string()]
}

/// Directory the browser opens when no path is given.
pub fn default_browse_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\")
    } else {
        PathBuf::from("/")
    }
}

/// Turn `"C:\\\0D:\\\0"` into `["C:", "D:"]`, keeping only `X:` letters.
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_drive_strings(raw: &str) -> Vec<String> {
    raw.split('\0')
        .map(|root| root.trim_end_matches('\\'))
        .filter(|root| {
            let b = root.as_bytes();
            b.len() == 2 && b[0].is_ascii_uppercase() && b[1] == b':'
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drive_strings() {
        assert_eq!(parse_drive_strings("C:\\\0D:\\\0\0"), vec!["C:", "D:"]);
        assert!(parse_drive_strings("\0").is_empty());
        assert!(parse_drive_strings("garbage\0").is_empty());
    }

    #[test]
    fn test_list_drives_is_never_empty() {
        assert!(!list_drives().is_empty());
    }
}
