//! The closed vocabulary of field tags.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Field kind of a logical record, identified by its line tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    ActivatingCompound,
    Application,
    Cofactor,
    Cloned,
    Crystallization,
    Engineering,
    Expression,
    GeneralInformation,
    GeneralStability,
    Ic50Value,
    /// Identity marker carrying the classification code; opens a segment.
    Identity,
    Inhibitors,
    KcatKmValue,
    KiValue,
    KmValue,
    Localization,
    MetalsIons,
    MolecularWeight,
    NaturalSubstrateProduct,
    OxidationStability,
    OrganicSolventStability,
    PhOptimum,
    PhRange,
    PhStability,
    PiValue,
    PosttranslationalModification,
    Protein,
    Purification,
    Reaction,
    Reference,
    Renatured,
    RecommendedName,
    ReactionType,
    SpecificActivity,
    SystematicName,
    SubstrateProduct,
    StorageStability,
    SourceTissue,
    Subunits,
    Synonyms,
    TurnoverNumber,
    TemperatureOptimum,
    TemperatureRange,
    TemperatureStability,
}

impl FieldKind {
    pub const ALL: [FieldKind; 44] = [
        Self::ActivatingCompound,
        Self::Application,
        Self::Cofactor,
        Self::Cloned,
        Self::Crystallization,
        Self::Engineering,
        Self::Expression,
        Self::GeneralInformation,
        Self::GeneralStability,
        Self::Ic50Value,
        Self::Identity,
        Self::Inhibitors,
        Self::KcatKmValue,
        Self::KiValue,
        Self::KmValue,
        Self::Localization,
        Self::MetalsIons,
        Self::MolecularWeight,
        Self::NaturalSubstrateProduct,
        Self::OxidationStability,
        Self::OrganicSolventStability,
        Self::PhOptimum,
        Self::PhRange,
        Self::PhStability,
        Self::PiValue,
        Self::PosttranslationalModification,
        Self::Protein,
        Self::Purification,
        Self::Reaction,
        Self::Reference,
        Self::Renatured,
        Self::RecommendedName,
        Self::ReactionType,
        Self::SpecificActivity,
        Self::SystematicName,
        Self::SubstrateProduct,
        Self::StorageStability,
        Self::SourceTissue,
        Self::Subunits,
        Self::Synonyms,
        Self::TurnoverNumber,
        Self::TemperatureOptimum,
        Self::TemperatureRange,
        Self::TemperatureStability,
    ];

    /// The line tag, e.g. `PR`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::ActivatingCompound => "AC",
            Self::Application => "AP",
            Self::Cofactor => "CF",
            Self::Cloned => "CL",
            Self::Crystallization => "CR",
            Self::Engineering => "EN",
            Self::Expression => "EXP",
            Self::GeneralInformation => "GI",
            Self::GeneralStability => "GS",
            Self::Ic50Value => "IC50",
            Self::Identity => "ID",
            Self::Inhibitors => "IN",
            Self::KcatKmValue => "KKM",
            Self::KiValue => "KI",
            Self::KmValue => "KM",
            Self::Localization => "LO",
            Self::MetalsIons => "ME",
            Self::MolecularWeight => "MW",
            Self::NaturalSubstrateProduct => "NSP",
            Self::OxidationStability => "OS",
            Self::OrganicSolventStability => "OSS",
            Self::PhOptimum => "PHO",
            Self::PhRange => "PHR",
            Self::PhStability => "PHS",
            Self::PiValue => "PI",
            Self::PosttranslationalModification => "PM",
            Self::Protein => "PR",
            Self::Purification => "PU",
            Self::Reaction => "RE",
            Self::Reference => "RF",
            Self::Renatured => "REN",
            Self::RecommendedName => "RN",
            Self::ReactionType => "RT",
            Self::SpecificActivity => "SA",
            Self::SystematicName => "SN",
            Self::SubstrateProduct => "SP",
            Self::StorageStability => "SS",
            Self::SourceTissue => "ST",
            Self::Subunits => "SU",
            Self::Synonyms => "SY",
            Self::TurnoverNumber => "TN",
            Self::TemperatureOptimum => "TO",
            Self::TemperatureRange => "TR",
            Self::TemperatureStability => "TS",
        }
    }

    /// The section header printed above a run of this kind, if any.
    pub fn display_name(self) -> Option<&'static str> {
        let name = match self {
            Self::ActivatingCompound => "ACTIVATING_COMPOUND",
            Self::Application => "APPLICATION",
            Self::Cofactor => "COFACTOR",
            Self::Cloned => "CLONED",
            Self::Crystallization => "CRYSTALLIZATION",
            Self::Engineering => "ENGINEERING",
            Self::Expression => "EXPRESSION",
            Self::GeneralInformation => "GENERAL_INFORMATION",
            Self::GeneralStability => "GENERAL_STABILITY",
            Self::Ic50Value => "IC50_VALUE",
            Self::Identity => return None,
            Self::Inhibitors => "INHIBITORS",
            Self::KcatKmValue => "KCAT_KM_VALUE",
            Self::KiValue => "KI_VALUE",
            Self::KmValue => "KM_VALUE",
            Self::Localization => "LOCALIZATION",
            Self::MetalsIons => "METALS_IONS",
            Self::MolecularWeight => "MOLECULAR_WEIGHT",
            Self::NaturalSubstrateProduct => "NATURAL_SUBSTRATE_PRODUCT",
            Self::OxidationStability => "OXIDATION_STABILITY",
            Self::OrganicSolventStability => "ORGANIC_SOLVENT_STABILITY",
            Self::PhOptimum => "PH_OPTIMUM",
            Self::PhRange => "PH_RANGE",
            Self::PhStability => "PH_STABILITY",
            Self::PiValue => "PI_VALUE",
            Self::PosttranslationalModification => "POSTTRANSLATIONAL_MODIFICATION",
            Self::Protein => "PROTEIN",
            Self::Purification => "PURIFICATION",
            Self::Reaction => "REACTION",
            Self::Reference => "REFERENCE",
            Self::Renatured => "RENATURED",
            Self::RecommendedName => "RECOMMENDED_NAME",
            Self::ReactionType => "REACTION_TYPE",
            Self::SpecificActivity => "SPECIFIC_ACTIVITY",
            Self::SystematicName => "SYSTEMATIC_NAME",
            Self::SubstrateProduct => "SUBSTRATE_PRODUCT",
            Self::StorageStability => "STORAGE_STABILITY",
            Self::SourceTissue => "SOURCE_TISSUE",
            Self::Subunits => "SUBUNITS",
            Self::Synonyms => "SYNONYMS",
            Self::TurnoverNumber => "TURNOVER_NUMBER",
            Self::TemperatureOptimum => "TEMPERATURE_OPTIMUM",
            Self::TemperatureRange => "TEMPERATURE_RANGE",
            Self::TemperatureStability => "TEMPERATURE_STABILITY",
        };
        Some(name)
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        TAGS.get(tag).copied()
    }

    /// True for a line consisting only of a section header.
    pub fn is_display_name(text: &str) -> bool {
        DISPLAY_NAMES.contains_key(text)
    }

    /// Protein and turnover-number records are the only kinds interpreted.
    pub fn is_of_interest(self) -> bool {
        matches!(self, Self::Protein | Self::TurnoverNumber)
    }
}

static TAGS: Lazy<FxHashMap<&'static str, FieldKind>> =
    Lazy::new(|| FieldKind::ALL.iter().map(|&k| (k.tag(), k)).collect());

static DISPLAY_NAMES: Lazy<FxHashMap<&'static str, FieldKind>> = Lazy::new(|| {
    FieldKind::ALL
        .iter()
        .filter_map(|&k| k.display_name().map(|name| (name, k)))
        .collect()
});
