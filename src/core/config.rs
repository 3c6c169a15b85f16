//! Build configurations and CMake options.
//!
//! Every platform has a fixed list of configurations. Each one gets its own
//! build directory and installs into its own subdirectory of the install
//! root, so the final archive carries all of them side by side.

use super::platform::Platform;

const GENERATOR_WIN32: &str = "Visual Studio 14 2015";
const GENERATOR_WIN64: &str = "Visual Studio 14 2015 Win64";

/// Boolean CMake cache options understood by the library's build.
///
/// `None` leaves the option out of the configure command, so the
/// project's own default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmakeOptions {
    /// `BUILD_SHARED_LIBS`
    pub build_shared_libs: Option<bool>,
    /// `USE_STATIC_CRT`
    pub use_static_crt: Option<bool>,
    /// `SIGN_BUILD`
    pub sign_build: Option<bool>,
}

impl CmakeOptions {
    /// Options for a static library build.
    pub fn static_lib() -> Self {
        CmakeOptions::default()
    }

    /// Options for a shared library build.
    pub fn shared_lib() -> Self {
        CmakeOptions {
            build_shared_libs: Some(true),
            ..CmakeOptions::default()
        }
    }

    pub fn with_static_crt(mut self, on: bool) -> Self {
        self.use_static_crt = Some(on);
        self
    }

    pub fn with_sign_build(mut self, on: bool) -> Self {
        self.sign_build = Some(on);
        self
    }

    /// The options that are set, in the order they are passed to CMake.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        [
            ("BUILD_SHARED_LIBS", self.build_shared_libs),
            ("USE_STATIC_CRT", self.use_static_crt),
            ("SIGN_BUILD", self.sign_build),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Render as `-DNAME=ON|OFF` definitions.
    pub fn definitions(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(name, on)| format!("-D{}={}", name, if on { "ON" } else { "OFF" }))
            .collect()
    }
}

/// A single named build of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Name of the build and install subdirectories.
    pub name: String,
    /// Explicit CMake generator, if the platform default is not wanted.
    pub generator: Option<String>,
    pub options: CmakeOptions,
}

impl BuildConfig {
    pub fn new(name: impl Into<String>, generator: Option<&str>, options: CmakeOptions) -> Self {
        BuildConfig {
            name: name.into(),
            generator: generator.map(str::to_string),
            options,
        }
    }
}

/// The configurations built on `platform`, in build order.
///
/// `ci` turns on `SIGN_BUILD` for the shared builds on platforms that sign.
pub fn configurations(platform: Platform, ci: bool) -> Vec<BuildConfig> {
    match platform {
        Platform::Win => {
            let dynamic = CmakeOptions::shared_lib()
                .with_static_crt(true)
                .with_sign_build(ci);
            vec![
                BuildConfig::new("win32-static", Some(GENERATOR_WIN32), CmakeOptions::static_lib()),
                BuildConfig::new("win32-dynamic", Some(GENERATOR_WIN32), dynamic),
                BuildConfig::new("win64-static", Some(GENERATOR_WIN64), CmakeOptions::static_lib()),
                BuildConfig::new("win64-dynamic", Some(GENERATOR_WIN64), dynamic),
            ]
        }
        Platform::Osx => vec![
            BuildConfig::new("osx-static", None, CmakeOptions::static_lib()),
            BuildConfig::new(
                "osx-dynamic",
                None,
                CmakeOptions::shared_lib().with_sign_build(ci),
            ),
        ],
        Platform::Linux => vec![
            BuildConfig::new("linux-static", None, CmakeOptions::static_lib()),
            BuildConfig::new("linux-dynamic", None, CmakeOptions::shared_lib()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_configurations() {
        let configs = configurations(Platform::Linux, false);
        assert_eq!(
            configs,
            vec![
                BuildConfig::new("linux-static", None, CmakeOptions::default()),
                BuildConfig::new(
                    "linux-dynamic",
                    None,
                    CmakeOptions {
                        build_shared_libs: Some(true),
                        ..Default::default()
                    }
                ),
            ]
        );

        // CI does not change anything on Linux
        assert_eq!(configurations(Platform::Linux, true), configs);
    }

    #[test]
    fn test_osx_configurations() {
        let configs = configurations(Platform::Osx, true);
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].name, "osx-static");
        assert!(configs[0].options.entries().is_empty());
        assert_eq!(configs[1].name, "osx-dynamic");
        assert_eq!(configs[1].generator, None);
        assert_eq!(
            configs[1].options.entries(),
            vec![("BUILD_SHARED_LIBS", true), ("SIGN_BUILD", true)]
        );

        let local = configurations(Platform::Osx, false);
        assert_eq!(local[1].options.sign_build, Some(false));
    }

    #[test]
    fn test_win_configurations() {
        let configs = configurations(Platform::Win, false);
        let names: Vec<_> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["win32-static", "win32-dynamic", "win64-static", "win64-dynamic"]
        );
        assert_eq!(configs[0].generator.as_deref(), Some("Visual Studio 14 2015"));
        assert_eq!(configs[1].generator.as_deref(), Some("Visual Studio 14 2015"));
        assert_eq!(configs[2].generator.as_deref(), Some("Visual Studio 14 2015 Win64"));
        assert_eq!(configs[3].generator.as_deref(), Some("Visual Studio 14 2015 Win64"));
        assert_eq!(
            configs[3].options.definitions(),
            vec![
                "-DBUILD_SHARED_LIBS=ON",
                "-DUSE_STATIC_CRT=ON",
                "-DSIGN_BUILD=OFF",
            ]
        );
    }

    #[test]
    fn test_definitions_skip_unset() {
        assert!(CmakeOptions::static_lib().definitions().is_empty());
        assert_eq!(
            CmakeOptions::default().with_sign_build(false).definitions(),
            vec!["-DSIGN_BUILD=OFF"]
        );
    }
}
