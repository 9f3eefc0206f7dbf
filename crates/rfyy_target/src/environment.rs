use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

/// Defines an identifier enum whose variants have a fixed external spelling. Identifiers that
/// are not recognized are kept verbatim in an `Other` variant instead of being rejected.
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $repr:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// An identifier that is not known, stored as-is.
            Other(String),
        }

        impl $name {
            /// Returns the external string representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $repr, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $repr => $name::$variant, )+
                    other => $name::Other(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match $name::from(s.as_str()) {
                    $name::Other(_) => $name::Other(s),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

identifier_enum! {
    /// The operating system of a target.
    pub enum Os {
        Unknown => "unknown",
        Linux => "linux",
        Windows => "windows",
        FreeBsd => "freebsd",
        Darwin => "darwin",
        Android => "android",
    }
}

identifier_enum! {
    /// The CPU architecture of a target.
    #[allow(non_camel_case_types)]
    pub enum Arch {
        Unknown => "unknown",
        /// 32-bit x86
        X86 => "386",
        X86_64 => "amd64",
        Arm64 => "arm64",
        Arm => "arm",
        Ppc64 => "ppc64",
        Ppc64le => "ppc64le",
        Wasm32 => "wasm",
    }
}

/// The family of C runtime library used on a target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Libc {
    Unknown,
    Gnu,
    Musl,
    Msvc,
    /// The platform has no separately named libc (e.g. macOS, FreeBSD)
    #[default]
    None,
}

impl Libc {
    pub fn as_str(self) -> &'static str {
        match self {
            Libc::Unknown => "unknown",
            Libc::Gnu => "gnu",
            Libc::Musl => "musl",
            Libc::Msvc => "msvc",
            Libc::None => "none",
        }
    }
}

impl fmt::Display for Libc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that is known about a target platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    pub os: Os,
    pub arch: Arch,

    #[serde(default)]
    pub libc: Libc,

    /// True if the floating-point unit lacks VFPv3, only ever set on ARM
    #[serde(default)]
    pub softfloat: bool,
}

#[cfg(test)]
mod test {
    use super::{Arch, Environment, Libc, Os};

    #[test]
    fn unrecognized_identifiers_pass_through() {
        assert_eq!("riscv64".parse::<Arch>(), Ok(Arch::Other("riscv64".to_owned())));
        assert_eq!(Os::from("plan9"), Os::Other("plan9".to_owned()));
        assert_eq!(Arch::from("mips").to_string(), "mips");
    }

    #[test]
    fn known_identifiers_use_external_spelling() {
        assert_eq!(Arch::from("amd64"), Arch::X86_64);
        assert_eq!(Arch::from("386"), Arch::X86);
        assert_eq!(Arch::from("wasm"), Arch::Wasm32);
        assert_eq!(Os::from("darwin"), Os::Darwin);
        assert_eq!(String::from(Arch::Ppc64le), "ppc64le");
        assert_eq!(Libc::Msvc.to_string(), "msvc");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let env: Environment = serde_json::from_str(r#"{"os":"darwin","arch":"arm64"}"#).unwrap();
        assert_eq!(
            env,
            Environment {
                os: Os::Darwin,
                arch: Arch::Arm64,
                libc: Libc::None,
                softfloat: false,
            }
        );
    }
}
