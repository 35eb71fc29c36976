use std::path::{Path, PathBuf};
use std::process::Command;

/// An external executable that can live either on `PATH` or in a dedicated directory.
pub trait Tool {
    /// Executable file name.
    const NAME: &'static str;

    /// Directory holding the executable, `None` to resolve it through `PATH`.
    fn exe_dir(&self) -> Option<&Path>;

    fn program(&self) -> PathBuf {
        match self.exe_dir() {
            Some(dir) => dir.join(Self::NAME),
            None => PathBuf::from(Self::NAME),
        }
    }

    /// A fresh command for the executable without any arguments.
    fn command(&self) -> Command {
        Command::new(self.program())
    }
}

macro_rules! define_tool {
    ($(#[$meta:meta])* $tool:ident => $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $tool {
            exe_dir: Option<std::path::PathBuf>,
        }

        impl $tool {
            pub fn new(exe_dir: Option<std::path::PathBuf>) -> Self {
                Self { exe_dir }
            }
        }

        impl $crate::tool::Tool for $tool {
            const NAME: &'static str = $name;

            fn exe_dir(&self) -> Option<&std::path::Path> {
                self.exe_dir.as_deref()
            }
        }
    };
}
