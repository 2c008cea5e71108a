use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const MSG_JSON_WRITTEN: &str = "cli.json_written";
    pub const MSG_CSV_WRITTEN: &str = "cli.csv_written";
    pub const MSG_CURVE_WRITTEN: &str = "cli.curve_written";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const FIELD_ROTOR_AREA: &str = "summary.rotor_area";
    pub const FIELD_BLADE_LENGTH: &str = "summary.blade_length";
    pub const FIELD_TSR: &str = "summary.tsr";
    pub const FIELD_RPM: &str = "summary.rpm";
    pub const FIELD_GEAR_RATIO: &str = "summary.gear_ratio";
    pub const FIELD_GENERATOR: &str = "summary.generator_type";
    pub const FIELD_CUT_IN: &str = "summary.cut_in";
    pub const FIELD_CUT_OUT: &str = "summary.cut_out";

    pub const TAB_DESIGN: &str = "gui.tab.design";
    pub const TAB_CURVES: &str = "gui.tab.curves";
    pub const TAB_SETTINGS: &str = "gui.tab.settings";
    pub const LABEL_TARGET_WATTAGE: &str = "gui.label.target_wattage";
    pub const LABEL_AIR_DENSITY: &str = "gui.label.air_density";
    pub const LABEL_WIND_SPEED: &str = "gui.label.wind_speed";
    pub const LABEL_BLADE_RADIUS: &str = "gui.label.blade_radius";
    pub const LABEL_NUM_BLADES: &str = "gui.label.num_blades";
    pub const LABEL_GENERATOR: &str = "gui.label.generator";
    pub const BTN_GENERATE: &str = "gui.btn.generate";
    pub const BTN_SAVE_JSON: &str = "gui.btn.save_json";
    pub const MSG_SAVED: &str = "gui.msg.saved";
    pub const CURVE_POWER_TITLE: &str = "gui.curve.power_title";
    pub const CURVE_CP_TITLE: &str = "gui.curve.cp_title";
    pub const CURVE_RPM_TITLE: &str = "gui.curve.rpm_title";
    pub const SERIES_POWER: &str = "gui.curve.series_power";
    pub const SERIES_CP: &str = "gui.curve.series_cp";
    pub const SERIES_RPM: &str = "gui.curve.series_rpm";
    pub const SETTINGS_LANGUAGE: &str = "gui.settings.language";
    pub const SETTINGS_SAVE: &str = "gui.settings.save";
    pub const SETTINGS_SAVED: &str = "gui.settings.saved";
    pub const SETTINGS_DEFAULTS_NOTE: &str = "gui.settings.defaults_note";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 내장 ko/en 문자열 테이블을 제공하는 번역기.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그 → 설정 → 시스템 로캘 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn detect_system_language() -> Option<String> {
    get_locale().and_then(|loc| normalize_lang(&loc))
}

fn ko(key: &str) -> &'static str {
    match key {
        keys::ERROR_PREFIX => "오류",
        keys::MSG_JSON_WRITTEN => "설계 요약(JSON) 기록:",
        keys::MSG_CSV_WRITTEN => "설계 요약(CSV) 기록:",
        keys::MSG_CURVE_WRITTEN => "곡선 데이터(CSV) 기록:",
        keys::SUMMARY_HEADING => "=== 터빈 설계 요약 ===",
        keys::FIELD_ROTOR_AREA => "로터 회전면적 [m²]",
        keys::FIELD_BLADE_LENGTH => "블레이드 길이 [m]",
        keys::FIELD_TSR => "주속비 (TSR)",
        keys::FIELD_RPM => "축 회전수 [rpm]",
        keys::FIELD_GEAR_RATIO => "기어비",
        keys::FIELD_GENERATOR => "발전기 종류",
        keys::FIELD_CUT_IN => "컷인 풍속 [m/s]",
        keys::FIELD_CUT_OUT => "컷아웃 풍속 [m/s]",
        keys::TAB_DESIGN => "설계",
        keys::TAB_CURVES => "곡선",
        keys::TAB_SETTINGS => "설정",
        keys::LABEL_TARGET_WATTAGE => "목표 출력 [W]",
        keys::LABEL_AIR_DENSITY => "공기 밀도 [kg/m³]",
        keys::LABEL_WIND_SPEED => "설계 풍속 [m/s]",
        keys::LABEL_BLADE_RADIUS => "블레이드 반경 [m]",
        keys::LABEL_NUM_BLADES => "블레이드 수",
        keys::LABEL_GENERATOR => "발전기 종류",
        keys::BTN_GENERATE => "설계 생성",
        keys::BTN_SAVE_JSON => "JSON으로 저장",
        keys::MSG_SAVED => "저장했습니다:",
        keys::CURVE_POWER_TITLE => "풍속-출력 곡선",
        keys::CURVE_CP_TITLE => "주속비-파워계수 곡선",
        keys::CURVE_RPM_TITLE => "풍속-축 회전수 곡선 (최적 주속비 기준)",
        keys::SERIES_POWER => "출력 [W]",
        keys::SERIES_CP => "파워계수 Cp",
        keys::SERIES_RPM => "축 회전수 [rpm]",
        keys::SETTINGS_LANGUAGE => "언어 (auto/ko/en)",
        keys::SETTINGS_SAVE => "설정 저장",
        keys::SETTINGS_SAVED => "설정을 저장했습니다.",
        keys::SETTINGS_DEFAULTS_NOTE => "입력 기본값은 config.toml에서 수정할 수 있습니다.",
        _ => key_fallback(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::ERROR_PREFIX => "Error",
        keys::MSG_JSON_WRITTEN => "Design summary (JSON) written:",
        keys::MSG_CSV_WRITTEN => "Design summary (CSV) written:",
        keys::MSG_CURVE_WRITTEN => "Curve data (CSV) written:",
        keys::SUMMARY_HEADING => "=== Turbine Design Summary ===",
        keys::FIELD_ROTOR_AREA => "Rotor area [m²]",
        keys::FIELD_BLADE_LENGTH => "Blade length [m]",
        keys::FIELD_TSR => "Tip-speed ratio (TSR)",
        keys::FIELD_RPM => "Shaft speed [rpm]",
        keys::FIELD_GEAR_RATIO => "Gear ratio",
        keys::FIELD_GENERATOR => "Generator type",
        keys::FIELD_CUT_IN => "Cut-in wind speed [m/s]",
        keys::FIELD_CUT_OUT => "Cut-out wind speed [m/s]",
        keys::TAB_DESIGN => "Design",
        keys::TAB_CURVES => "Curves",
        keys::TAB_SETTINGS => "Settings",
        keys::LABEL_TARGET_WATTAGE => "Target wattage [W]",
        keys::LABEL_AIR_DENSITY => "Air density [kg/m³]",
        keys::LABEL_WIND_SPEED => "Wind speed [m/s]",
        keys::LABEL_BLADE_RADIUS => "Blade radius [m]",
        keys::LABEL_NUM_BLADES => "Number of blades",
        keys::LABEL_GENERATOR => "Generator type",
        keys::BTN_GENERATE => "Generate",
        keys::BTN_SAVE_JSON => "Save as JSON",
        keys::MSG_SAVED => "Saved:",
        keys::CURVE_POWER_TITLE => "Power vs. wind speed",
        keys::CURVE_CP_TITLE => "Cp vs. TSR",
        keys::CURVE_RPM_TITLE => "Shaft speed vs. wind speed (at optimal TSR)",
        keys::SERIES_POWER => "Power [W]",
        keys::SERIES_CP => "Cp",
        keys::SERIES_RPM => "Shaft speed [rpm]",
        keys::SETTINGS_LANGUAGE => "Language (auto/ko/en)",
        keys::SETTINGS_SAVE => "Save settings",
        keys::SETTINGS_SAVED => "Settings saved.",
        keys::SETTINGS_DEFAULTS_NOTE => "Input defaults can be edited in config.toml.",
        _ => return None,
    };
    Some(s)
}

fn key_fallback(key: &str) -> &'static str {
    // 알 수 없는 키는 키 자체를 노출해 누락을 드러낸다.
    Box::leak(key.to_string().into_boxed_str())
}
