//! Language catalog
//!
//! The closed set of language codes accepted as translation directory names.

use crate::core::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Every recognised language code
pub const LANGUAGES: &[&str] = &[
    "zh_CHS", "ar_SA", "bg_BG", "ca_ES", "zh_TW", "cs_CZ", "da_DK", "de_DE", "el_GR", "en_US",
    "es_ES", "fi_FI", "fr_FR", "he_IL", "hu_HU", "is_IS", "it_IT", "ja_JP", "ko_KR", "nl_NL",
    "nb_NO", "pl_PL", "pt_BR", "rm_CH", "ro_RO", "ru_RU", "hr_HR", "sk_SK", "sq_AL", "sv_SE",
    "th_TH", "tr_TR", "ur_PK", "id_ID", "uk_UA", "be_BY", "sl_SI", "et_EE", "lv_LV", "lt_LT",
    "tg_TJ", "fa_IR", "vi_VN", "hy_AM", "eu_ES", "wen_DE", "mk_MK", "st_ZA", "ts_ZA", "tn_ZA",
    "ven_ZA", "xh_ZA", "zu_ZA", "af_ZA", "ka_GE", "fo_FO", "hi_IN", "mt_MT", "se_NO", "gd_GB",
    "yi", "ms_MY", "kk_KZ", "ky_KG", "sw_KE", "tk_TM", "tt_RU", "bn_IN", "pa_IN", "gu_IN", "or_IN",
    "ta_IN", "te_IN", "kn_IN", "ml_IN", "as_IN", "mr_IN", "sa_IN", "mn_MN", "bo_CN", "cy_GB", "kh_KH",
    "lo_LA", "my_MM", "gl_ES", "kok_IN", "sd_IN", "syr_SY", "si_LK", "chr_US", "am_ET", "tmz", "ne_NP",
    "fy_NL", "ps_AF", "fil_PH", "div_MV", "bin_NG", "fuv_NG", "ha_NG", "ibb_NG", "yo_NG", "quz_BO",
    "ns_ZA", "ba_RU", "lb_LU", "kl_GL", "ii_CN", "arn_CL", "moh_CA", "br_FR", "ug_CN", "mi_NZ",
    "oc_FR", "co_FR", "gsw_FR", "sah_RU", "qut_GT", "rw_RW", "wo_SN", "gbz_AF", "ar_IQ", "zh_CN",
    "de_CH", "en_GB", "es_MX", "fr_BE", "it_CH", "nl_BE", "nn_NO", "pt_PT", "ro_MD", "ru_MD", "sv_FI",
    "ur_IN", "az_AZ", "dsb_DE", "se_SE", "ga_IE", "ms_BN", "uz_UZ", "mn_CN", "bo_BT", "iu_CA",
    "tmz_DZ", "ne_IN", "quz_EC", "ti_ET", "ar_EG", "zh_HK", "de_AT", "en_AU", "fr_CA", "sr_SP", "se_FI",
    "quz_PE", "ar_LY", "zh_SG", "de_LU", "en_CA", "es_GT", "fr_CH", "hr_BA", "smj_NO", "ar_DZ", "zh_MO",
    "de_LI", "en_NZ", "es_CR", "fr_LU", "smj_SE", "ar_MA", "en_IE", "es_PA", "fr_MC", "sma_NO", "ar_TN",
    "en_ZA", "es_DO", "fr_029", "sr_BA", "sma_SE", "ar_OM", "en_JA", "es_VE", "fr_RE", "bs_BA", "sms_FI",
    "ar_YE", "en_CB", "es_CO", "fr_CG", "smn_FI", "ar_SY", "en_BZ", "es_PE", "fr_SN", "ar_JO", "en_TT",
    "es_AR", "fr_CM", "ar_LB", "en_ZW", "es_EC", "fr_CI", "ar_KW", "en_PH", "es_CL", "fr_ML", "ar_AE",
    "en_ID", "es_UR", "fr_MA", "ar_BH", "en_HK", "es_PY", "fr_HT", "ar_QA", "en_IN", "es_BO", "en_MY",
    "es_SV", "en_SG", "es_HN", "es_NI", "es_PR", "es_US", "zh_CHT",
];

/// Check whether a string is a recognised language code
pub fn is_valid(code: &str) -> bool {
    LANGUAGES.contains(&code)
}

/// A language code guaranteed to be part of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Language(&'static str);

impl Language {
    pub const EN_US: Language = Language("en_US");

    /// The catalog code, e.g. `"en_US"`
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterate over the whole catalog
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().copied().map(Language)
    }

    /// Locale used by Fluent for plural and number rules.
    ///
    /// Codes that are not valid BCP 47 (`zh_CHS`, `zh_CHT`) degrade to their
    /// language subtag, then to `und`.
    pub fn langid(&self) -> LanguageIdentifier {
        let tag = self.0.replace('_', "-");
        if let Ok(langid) = tag.parse::<LanguageIdentifier>() {
            return langid;
        }
        self.0
            .split('_')
            .next()
            .and_then(|lang| lang.parse::<LanguageIdentifier>().ok())
            .unwrap_or_default()
    }

    /// Detect the system language from the locale environment variables
    pub fn detect_system() -> Option<Language> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| Self::from_locale(&value))
    }

    /// Map a POSIX locale string (e.g. "fr_FR.UTF-8") onto the catalog
    fn from_locale(locale: &str) -> Option<Language> {
        // Extract the code (e.g., "fr_FR.UTF-8@euro" -> "fr_FR")
        let code = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        if let Ok(language) = code.parse() {
            return Some(language);
        }

        let lang = code.split('_').next().unwrap_or_default();
        if lang.is_empty() {
            return None;
        }
        Self::all().find(|language| language.0.split('_').next() == Some(lang))
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .copied()
            .find(|candidate| *candidate == code)
            .map(Language)
            .ok_or_else(|| Error::Translator(format!("{} is not a valid language identifier", code)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;

    #[test]
    fn test_membership() {
        assert!(is_valid("en_US"));
        assert!(is_valid("yi"));
        assert!(is_valid("fr_029"));
        assert!(!is_valid("en-US"));
        assert!(!is_valid("en_us"));
        assert!(!is_valid("xx_XX"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_parse() {
        let language: Language = "de_DE".parse().unwrap();
        assert_eq!(language.as_str(), "de_DE");
        assert_eq!(language.to_string(), "de_DE");
        assert_eq!("en_US".parse::<Language>().unwrap(), Language::EN_US);

        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::Translator);
    }

    #[test]
    fn test_catalog_is_unique() {
        let mut codes: Vec<&str> = LANGUAGES.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
        assert_eq!(Language::all().count(), LANGUAGES.len());
    }

    #[test]
    fn test_langid() {
        assert_eq!(Language::EN_US.langid().to_string(), "en-US");
        assert_eq!("fr_029".parse::<Language>().unwrap().langid().to_string(), "fr-029");
        assert_eq!("zh_CHS".parse::<Language>().unwrap().langid().to_string(), "zh");
        assert_eq!("yi".parse::<Language>().unwrap().langid().to_string(), "yi");
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("fr_FR.UTF-8"), Some("fr_FR".parse().unwrap()));
        assert_eq!(Language::from_locale("de_AT@euro"), Some("de_AT".parse().unwrap()));
        assert_eq!(Language::from_locale("en-GB"), Some("en_GB".parse().unwrap()));
        // Language-only locale picks the first catalog entry for that language
        assert_eq!(Language::from_locale("fr"), Some("fr_FR".parse().unwrap()));
        assert_eq!(Language::from_locale("C"), None);
        assert_eq!(Language::from_locale(""), None);
    }
}
