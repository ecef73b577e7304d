// ignore defaults
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "LICENSE",
    "License.md",
    "license.md",
    "license.txt",
    "README.md",
    "ReadMe.md",
    "Readme.md",
    "readme.md",
    "readMe.md",
    ".gitignore",
];
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["__pycache__", ".git", ".idea", "venv", "build", "dist"];

// diff
pub const DEFAULT_CONTEXT: usize = 3;

// patch
pub const PATCH_FILE_PREFIX: &str = "congruency-";
pub const PATCH_FILE_SUFFIX: &str = ".patch";
