//! fopen-style mode tokens.
//!
//! A mode is one access character (`r`, `w` or `a`) followed, in any order,
//! by at most one each of `+` (update), `b` (binary), `t` (text) and `x`
//! (exclusive create, `w` only). Tokens are validated up front so a bad mode
//! never reaches the file system.

use std::fmt;
use std::fs::OpenOptions;
use std::str::FromStr;

use crate::error::ModeError;

/// Primary access requested by a mode token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `r`: open an existing file, positioned at the start
    Read,
    /// `w`: create or truncate
    Write,
    /// `a`: create if missing, every write goes to the end
    Append,
}

/// Binary/text marker. Has no effect on the byte stream on POSIX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Translation {
    /// Neither `b` nor `t`
    #[default]
    Unspecified,
    /// `b`
    Binary,
    /// `t`
    Text,
}

/// A parsed mode token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    access: Access,
    update: bool,
    translation: Translation,
    exclusive: bool,
}

impl OpenMode {
    /// Create a mode with the given access and no flags.
    pub fn new(access: Access) -> Self {
        Self {
            access,
            update: false,
            translation: Translation::Unspecified,
            exclusive: false,
        }
    }

    /// `wb`: truncate or create, binary.
    pub fn overwrite() -> Self {
        Self::new(Access::Write).with_translation(Translation::Binary)
    }

    /// `ab`: append or create, binary.
    pub fn append() -> Self {
        Self::new(Access::Append).with_translation(Translation::Binary)
    }

    /// `wbx`: create a new file, failing if it already exists.
    pub fn create_new() -> Self {
        Self {
            exclusive: true,
            ..Self::overwrite()
        }
    }

    /// Set the `+` flag.
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Set the binary/text marker.
    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = translation;
        self
    }

    /// Primary access (`r`, `w` or `a`).
    pub fn access(&self) -> Access {
        self.access
    }

    /// Whether `+` was given.
    pub fn is_update(&self) -> bool {
        self.update
    }

    /// The binary/text marker.
    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Whether `x` was given.
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Whether a handle opened with this mode accepts writes.
    pub fn is_writable(&self) -> bool {
        !matches!(self.access, Access::Read) || self.update
    }

    /// Translate the mode into `OpenOptions`.
    pub fn options(&self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        match self.access {
            Access::Read => {
                opts.read(true).write(self.update);
            }
            Access::Write => {
                opts.write(true).read(self.update);
                if self.exclusive {
                    opts.create_new(true);
                } else {
                    opts.create(true).truncate(true);
                }
            }
            Access::Append => {
                opts.append(true).create(true).read(self.update);
            }
        }
        opts
    }
}

impl FromStr for OpenMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let access = match chars.next() {
            None => return Err(ModeError::Empty),
            Some('r') => Access::Read,
            Some('w') => Access::Write,
            Some('a') => Access::Append,
            Some(c) => return Err(ModeError::UnknownAccess(c)),
        };

        let mut mode = OpenMode::new(access);
        let mut seen_translation = false;
        for c in chars {
            match c {
                '+' => {
                    if mode.update {
                        return Err(ModeError::DuplicateFlag(c));
                    }
                    mode.update = true;
                }
                'b' | 't' => {
                    let wanted = if c == 'b' {
                        Translation::Binary
                    } else {
                        Translation::Text
                    };
                    if seen_translation {
                        return Err(if mode.translation == wanted {
                            ModeError::DuplicateFlag(c)
                        } else {
                            ModeError::ConflictingTranslation
                        });
                    }
                    seen_translation = true;
                    mode.translation = wanted;
                }
                'x' => {
                    if mode.exclusive {
                        return Err(ModeError::DuplicateFlag(c));
                    }
                    mode.exclusive = true;
                }
                other => return Err(ModeError::UnknownFlag(other)),
            }
        }

        if mode.exclusive && mode.access != Access::Write {
            return Err(ModeError::ExclusiveWithoutWrite);
        }
        Ok(mode)
    }
}

/// Renders the canonical token, e.g. `r+b` or `wbx`.
impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            Access::Read => 'r',
            Access::Write => 'w',
            Access::Append => 'a',
        };
        write!(f, "{access}")?;
        if self.update {
            write!(f, "+")?;
        }
        match self.translation {
            Translation::Unspecified => {}
            Translation::Binary => write!(f, "b")?,
            Translation::Text => write!(f, "t")?,
        }
        if self.exclusive {
            write!(f, "x")?;
        }
        Ok(())
    }
}
