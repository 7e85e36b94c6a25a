use std::sync::OnceLock;

use indexmap::IndexMap;

/// Maps a Shift-JIS bone name to its canonical ASCII identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoneNameEntry {
    pub legacy: &'static [u8],
    pub canonical: &'static str,
    pub unicode: &'static str,
}

impl BoneNameEntry {
    pub const fn new(legacy: &'static [u8], canonical: &'static str, unicode: &'static str) -> Self {
        Self { legacy, canonical, unicode }
    }
}

// Common MMD skeleton names, CP932 encoded.
pub const STANDARD_BONE_NAMES: &[BoneNameEntry] = &[
    BoneNameEntry::new(b"\x83\x4F\x83\x8B\x81\x5B\x83\x75", "groove", "グルーブ"),
    BoneNameEntry::new(b"\x83\x5A\x83\x93\x83\x5E\x81\x5B", "center", "センター"),
    BoneNameEntry::new(b"\x8F\xE3\x94\xBC\x90\x67", "upper_body", "上半身"),
    BoneNameEntry::new(b"\x89\xBA\x94\xBC\x90\x67", "lower_body", "下半身"),
    BoneNameEntry::new(b"\x97\xBC\x96\xDA", "eyes", "両目"),
    BoneNameEntry::new(b"\x91\x53\x82\xC4\x82\xCC\x90\x65", "mother", "全ての親"),
    BoneNameEntry::new(b"\x89\x45\x82\xC2\x82\xDC\x90\xE6\x82\x68\x82\x6A", "toe_IK_R", "右つま先ＩＫ"),
    BoneNameEntry::new(b"\x89\x45\x82\xD0\x82\xB4", "knee_R", "右ひざ"),
    BoneNameEntry::new(b"\x89\x45\x82\xD0\x82\xB6", "elbow_R", "右ひじ"),
    BoneNameEntry::new(b"\x89\x45\x92\x86\x8E\x77\x82\x50", "middle1_R", "右中指１"),
    BoneNameEntry::new(b"\x89\x45\x92\x86\x8E\x77\x82\x51", "middle2_R", "右中指２"),
    BoneNameEntry::new(b"\x89\x45\x92\x86\x8E\x77\x82\x52", "middle3_R", "右中指３"),
    BoneNameEntry::new(b"\x89\x45\x90\x6C\x8E\x77\x82\x50", "fore1_R", "右人指１"),
    BoneNameEntry::new(b"\x89\x45\x90\x6C\x8E\x77\x82\x51", "fore2_R", "右人指２"),
    BoneNameEntry::new(b"\x89\x45\x90\x6C\x8E\x77\x82\x52", "fore3_R", "右人指３"),
    BoneNameEntry::new(b"\x89\x45\x8F\xAC\x8E\x77\x82\x50", "little1_R", "右小指１"),
    BoneNameEntry::new(b"\x89\x45\x8F\xAC\x8E\x77\x82\x51", "little2_R", "右小指２"),
    BoneNameEntry::new(b"\x89\x45\x8F\xAC\x8E\x77\x82\x52", "little3_R", "右小指３"),
    BoneNameEntry::new(b"\x89\x45\x8E\xE8\x8E\xF1", "wrist_R", "右手首"),
    BoneNameEntry::new(b"\x89\x45\x96\xDA", "eye_R", "右目"),
    BoneNameEntry::new(b"\x89\x45\x8C\xA8", "shoulder_R", "右肩"),
    BoneNameEntry::new(b"\x89\x45\x98\x72", "arm_R", "右腕"),
    BoneNameEntry::new(b"\x89\x45\x96\xF2\x8E\x77\x82\x50", "third1_R", "右薬指１"),
    BoneNameEntry::new(b"\x89\x45\x96\xF2\x8E\x77\x82\x51", "third2_R", "右薬指２"),
    BoneNameEntry::new(b"\x89\x45\x96\xF2\x8E\x77\x82\x52", "third3_R", "右薬指３"),
    BoneNameEntry::new(b"\x89\x45\x91\xB3", "sleeve_R", "右袖"),
    BoneNameEntry::new(b"\x89\x45\x91\xB3\x90\xE6", "cuff_R", "右袖先"),
    BoneNameEntry::new(b"\x89\x45\x90\x65\x8E\x77\x82\x50", "thumb1_R", "右親指１"),
    BoneNameEntry::new(b"\x89\x45\x90\x65\x8E\x77\x82\x51", "thumb2_R", "右親指２"),
    BoneNameEntry::new(b"\x89\x45\x91\xAB", "leg_R", "右足"),
    BoneNameEntry::new(b"\x89\x45\x91\xAB\x8E\xF1", "ankle_R", "右足首"),
    BoneNameEntry::new(b"\x89\x45\x91\xAB\x82\x68\x82\x6A", "leg_IK_R", "右足ＩＫ"),
    BoneNameEntry::new(b"\x8D\xB6\x82\xC2\x82\xDC\x90\xE6\x82\x68\x82\x6A", "toe_IK_L", "左つま先ＩＫ"),
    BoneNameEntry::new(b"\x8D\xB6\x82\xD0\x82\xB4", "knee_L", "左ひざ"),
    BoneNameEntry::new(b"\x8D\xB6\x82\xD0\x82\xB6", "elbow_L", "左ひじ"),
    BoneNameEntry::new(b"\x8D\xB6\x92\x86\x8E\x77\x82\x50", "middle1_L", "左中指１"),
    BoneNameEntry::new(b"\x8D\xB6\x92\x86\x8E\x77\x82\x51", "middle2_L", "左中指２"),
    BoneNameEntry::new(b"\x8D\xB6\x92\x86\x8E\x77\x82\x52", "middle3_L", "左中指３"),
    BoneNameEntry::new(b"\x8D\xB6\x90\x6C\x8E\x77\x82\x50", "fore1_L", "左人指１"),
    BoneNameEntry::new(b"\x8D\xB6\x90\x6C\x8E\x77\x82\x51", "fore2_L", "左人指２"),
    BoneNameEntry::new(b"\x8D\xB6\x90\x6C\x8E\x77\x82\x52", "fore3_L", "左人指３"),
    BoneNameEntry::new(b"\x8D\xB6\x8F\xAC\x8E\x77\x82\x50", "little1_L", "左小指１"),
    BoneNameEntry::new(b"\x8D\xB6\x8F\xAC\x8E\x77\x82\x51", "little2_L", "左小指２"),
    BoneNameEntry::new(b"\x8D\xB6\x8F\xAC\x8E\x77\x82\x52", "little3_L", "左小指３"),
    BoneNameEntry::new(b"\x8D\xB6\x8E\xE8\x8E\xF1", "wrist_L", "左手首"),
    BoneNameEntry::new(b"\x8D\xB6\x96\xDA", "eye_L", "左目"),
    BoneNameEntry::new(b"\x8D\xB6\x8C\xA8", "shoulder_L", "左肩"),
    BoneNameEntry::new(b"\x8D\xB6\x98\x72", "arm_L", "左腕"),
    BoneNameEntry::new(b"\x8D\xB6\x96\xF2\x8E\x77\x82\x50", "third1_L", "左薬指１"),
    BoneNameEntry::new(b"\x8D\xB6\x96\xF2\x8E\x77\x82\x51", "third2_L", "左薬指２"),
    BoneNameEntry::new(b"\x8D\xB6\x96\xF2\x8E\x77\x82\x52", "third3_L", "左薬指３"),
    BoneNameEntry::new(b"\x8D\xB6\x91\xB3", "sleeve_L", "左袖"),
    BoneNameEntry::new(b"\x8D\xB6\x91\xB3\x90\xE6", "cuff_L", "左袖先"),
    BoneNameEntry::new(b"\x8D\xB6\x90\x65\x8E\x77\x82\x50", "thumb1_L", "左親指１"),
    BoneNameEntry::new(b"\x8D\xB6\x90\x65\x8E\x77\x82\x51", "thumb2_L", "左親指２"),
    BoneNameEntry::new(b"\x8D\xB6\x91\xAB", "leg_L", "左足"),
    BoneNameEntry::new(b"\x8D\xB6\x91\xAB\x8E\xF1", "ankle_L", "左足首"),
    BoneNameEntry::new(b"\x8D\xB6\x91\xAB\x82\x68\x82\x6A", "leg_IK_L", "左足ＩＫ"),
    BoneNameEntry::new(b"\x93\xAA", "head", "頭"),
    BoneNameEntry::new(b"\x8E\xF1", "neck", "首"),
];

/// Immutable lookup from legacy bone name bytes to canonical identifiers.
#[derive(Clone, Debug)]
pub struct BoneNameTable {
    by_legacy: IndexMap<&'static [u8], &'static BoneNameEntry>,
}

impl BoneNameTable {
    /// Builds a table from `entries`. The first entry wins for a repeated legacy key.
    pub fn new(entries: &'static [BoneNameEntry]) -> Self {
        let mut by_legacy = IndexMap::with_capacity(entries.len());
        for entry in entries {
            by_legacy.entry(entry.legacy).or_insert(entry);
        }
        Self { by_legacy }
    }

    /// The shared table of [`STANDARD_BONE_NAMES`].
    pub fn standard() -> &'static BoneNameTable {
        static TABLE: OnceLock<BoneNameTable> = OnceLock::new();
        TABLE.get_or_init(|| BoneNameTable::new(STANDARD_BONE_NAMES))
    }

    pub fn resolve(&self, raw: &[u8]) -> Option<&'static str> {
        self.by_legacy.get(raw).map(|e| e.canonical)
    }

    pub fn entry(&self, raw: &[u8]) -> Option<&'static BoneNameEntry> {
        self.by_legacy.get(raw).copied()
    }

    /// All canonical names, in table order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_legacy.values().map(|e| e.canonical)
    }

    #[inline]
    pub fn len(&self) -> usize { self.by_legacy.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.by_legacy.is_empty() }
}
