use std::fmt;

const TYPE_MASK: u32 = 0o170_000;
const TYPE_SOCKET: u32 = 0o140_000;
const TYPE_SYMLINK: u32 = 0o120_000;
const TYPE_REGULAR: u32 = 0o100_000;
const TYPE_BLOCK: u32 = 0o060_000;
const TYPE_DIRECTORY: u32 = 0o040_000;
const TYPE_CHAR: u32 = 0o020_000;
const TYPE_FIFO: u32 = 0o010_000;

const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// File type and permission bits, laid out like a Unix `st_mode`.
///
/// Displays the way `ls -l` prints its first column, e.g. `drwxr-xr-x`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FileMode(u32);

impl FileMode {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Build a mode for hosts without Unix permission bits.
    pub fn synthesize(is_dir: bool, readonly: bool) -> Self {
        let kind = if is_dir { TYPE_DIRECTORY } else { TYPE_REGULAR };
        let perms = match (is_dir, readonly) {
            (true, false) => 0o755,
            (true, true) => 0o555,
            (false, false) => 0o644,
            (false, true) => 0o444,
        };
        Self(kind | perms)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    fn type_char(self) -> char {
        match self.0 & TYPE_MASK {
            TYPE_DIRECTORY => 'd',
            TYPE_SYMLINK => 'l',
            TYPE_FIFO => 'p',
            TYPE_SOCKET => 's',
            TYPE_CHAR => 'c',
            TYPE_BLOCK => 'b',
            _ => '-',
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.0;
        let mut out = String::with_capacity(10);
        out.push(self.type_char());

        // (shift, special bit, char when exec is set, char when exec is clear)
        let triads = [
            (6, SETUID, 's', 'S'),
            (3, SETGID, 's', 'S'),
            (0, STICKY, 't', 'T'),
        ];
        for (shift, special, with_exec, without_exec) in triads {
            let triad = (bits >> shift) & 0o7;
            out.push(if triad & 0o4 != 0 { 'r' } else { '-' });
            out.push(if triad & 0o2 != 0 { 'w' } else { '-' });
            let exec = triad & 0o1 != 0;
            out.push(match (bits & special != 0, exec) {
                (true, true) => with_exec,
                (true, false) => without_exec,
                (false, true) => 'x',
                (false, false) => '-',
            });
        }

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_common_modes() {
        assert_eq!(FileMode::from_raw(0o040_755).to_string(), "drwxr-xr-x");
        assert_eq!(FileMode::from_raw(0o100_644).to_string(), "-rw-r--r--");
        assert_eq!(FileMode::from_raw(0o120_777).to_string(), "lrwxrwxrwx");
        assert_eq!(FileMode::from_raw(0o010_600).to_string(), "prw-------");
    }

    #[test]
    fn formats_special_bits() {
        assert_eq!(FileMode::from_raw(0o104_755).to_string(), "-rwsr-xr-x");
        assert_eq!(FileMode::from_raw(0o102_645).to_string(), "-rw-r-Sr-x");
        assert_eq!(FileMode::from_raw(0o041_777).to_string(), "drwxrwxrwt");
        assert_eq!(FileMode::from_raw(0o041_776).to_string(), "drwxrwxrwT");
    }

    #[test]
    fn synthesized_modes_match_kind() {
        assert_eq!(FileMode::synthesize(true, false).to_string(), "drwxr-xr-x");
        assert_eq!(FileMode::synthesize(false, true).to_string(), "-r--r--r--");
    }
}
