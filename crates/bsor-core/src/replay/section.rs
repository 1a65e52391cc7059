use strum::IntoStaticStr;

/// A region of the replay stream.
///
/// The eight root sections `Info` through `UserData` are each introduced by a
/// magic byte equal to their index. `Header` covers the root magic number and
/// file version, `TricksReplay` the vendor extension embedded in a UserData
/// blob; neither carries a section magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Section {
    Header,
    Info,
    Frames,
    Notes,
    Walls,
    Heights,
    Pauses,
    ControllerOffsets,
    UserData,
    TricksReplay,
}

impl Section {
    /// Root sections in wire order.
    pub const ROOT: [Section; 8] = [
        Section::Info,
        Section::Frames,
        Section::Notes,
        Section::Walls,
        Section::Heights,
        Section::Pauses,
        Section::ControllerOffsets,
        Section::UserData,
    ];

    /// The magic byte that introduces this section, if it has one.
    pub fn magic(self) -> Option<u8> {
        match self {
            Section::Info => Some(0),
            Section::Frames => Some(1),
            Section::Notes => Some(2),
            Section::Walls => Some(3),
            Section::Heights => Some(4),
            Section::Pauses => Some(5),
            Section::ControllerOffsets => Some(6),
            Section::UserData => Some(7),
            Section::Header | Section::TricksReplay => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
