/// Sound information attached to a hitobject or one of its nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HitSampleInfo {
    /// The name of the sample e.g. `"hitnormal"`.
    pub name: String,
    /// The bank to load the sample from e.g. `"soft"`.
    pub bank: String,
    /// The volume in percent.
    pub volume: i32,
}

impl HitSampleInfo {
    pub const HIT_NORMAL: &'static str = "hitnormal";
    pub const HIT_WHISTLE: &'static str = "hitwhistle";
    pub const HIT_FINISH: &'static str = "hitfinish";
    pub const HIT_CLAP: &'static str = "hitclap";
    pub const SLIDER_TICK: &'static str = "slidertick";

    pub fn new(name: impl Into<String>, bank: impl Into<String>, volume: i32) -> Self {
        Self {
            name: name.into(),
            bank: bank.into(),
            volume,
        }
    }

    /// A copy of `self` with a different name but the same bank and volume.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: self.bank.clone(),
            volume: self.volume,
        }
    }

    pub fn is_hit_normal(&self) -> bool {
        self.name == Self::HIT_NORMAL
    }
}
