//! Language codes shared by audio and caption descriptions.

string_enum! {
    /// ISO 639-2 three-letter language code, plus the service's private codes
    /// `QAA` (original language), `QPC` and `TNG`.
    pub enum LanguageCode {
        Eng => "ENG",
        Spa => "SPA",
        Fra => "FRA",
        Deu => "DEU",
        Ger => "GER",
        Zho => "ZHO",
        Ara => "ARA",
        Hin => "HIN",
        Jpn => "JPN",
        Rus => "RUS",
        Por => "POR",
        Ita => "ITA",
        Urd => "URD",
        Vie => "VIE",
        Kor => "KOR",
        Pan => "PAN",
        Abk => "ABK",
        Aar => "AAR",
        Afr => "AFR",
        Aka => "AKA",
        Sqi => "SQI",
        Amh => "AMH",
        Arg => "ARG",
        Hye => "HYE",
        Asm => "ASM",
        Ava => "AVA",
        Ave => "AVE",
        Aym => "AYM",
        Aze => "AZE",
        Bam => "BAM",
        Bak => "BAK",
        Eus => "EUS",
        Bel => "BEL",
        Ben => "BEN",
        Bih => "BIH",
        Bis => "BIS",
        Bos => "BOS",
        Bre => "BRE",
        Bul => "BUL",
        Mya => "MYA",
        Cat => "CAT",
        Khm => "KHM",
        Cha => "CHA",
        Che => "CHE",
        Nya => "NYA",
        Chu => "CHU",
        Chv => "CHV",
        Cor => "COR",
        Cos => "COS",
        Cre => "CRE",
        Hrv => "HRV",
        Ces => "CES",
        Dan => "DAN",
        Div => "DIV",
        Nld => "NLD",
        Dzo => "DZO",
        Enm => "ENM",
        Epo => "EPO",
        Est => "EST",
        Ewe => "EWE",
        Fao => "FAO",
        Fij => "FIJ",
        Fin => "FIN",
        Frm => "FRM",
        Ful => "FUL",
        Gla => "GLA",
        Glg => "GLG",
        Lug => "LUG",
        Kat => "KAT",
        Ell => "ELL",
        Grn => "GRN",
        Guj => "GUJ",
        Hat => "HAT",
        Hau => "HAU",
        Heb => "HEB",
        Her => "HER",
        Hmo => "HMO",
        Hun => "HUN",
        Isl => "ISL",
        Ido => "IDO",
        Ibo => "IBO",
        Ind => "IND",
        Ina => "INA",
        Ile => "ILE",
        Iku => "IKU",
        Ipk => "IPK",
        Gle => "GLE",
        Jav => "JAV",
        Kal => "KAL",
        Kan => "KAN",
        Kau => "KAU",
        Kas => "KAS",
        Kaz => "KAZ",
        Kik => "KIK",
        Kin => "KIN",
        Kir => "KIR",
        Kom => "KOM",
        Kon => "KON",
        Kua => "KUA",
        Kur => "KUR",
        Lao => "LAO",
        Lat => "LAT",
        Lav => "LAV",
        Lim => "LIM",
        Lin => "LIN",
        Lit => "LIT",
        Lub => "LUB",
        Ltz => "LTZ",
        Mkd => "MKD",
        Mlg => "MLG",
        Msa => "MSA",
        Mal => "MAL",
        Mlt => "MLT",
        Glv => "GLV",
        Mri => "MRI",
        Mar => "MAR",
        Mah => "MAH",
        Mon => "MON",
        Nau => "NAU",
        Nav => "NAV",
        Nde => "NDE",
        Nbl => "NBL",
        Ndo => "NDO",
        Nep => "NEP",
        Sme => "SME",
        Nor => "NOR",
        Nob => "NOB",
        Nno => "NNO",
        Oci => "OCI",
        Oji => "OJI",
        Ori => "ORI",
        Orm => "ORM",
        Oss => "OSS",
        Pli => "PLI",
        Fas => "FAS",
        Pol => "POL",
        Pus => "PUS",
        Que => "QUE",
        Qaa => "QAA",
        Ron => "RON",
        Roh => "ROH",
        Run => "RUN",
        Smo => "SMO",
        Sag => "SAG",
        San => "SAN",
        Srd => "SRD",
        Srb => "SRB",
        Sna => "SNA",
        Iii => "III",
        Snd => "SND",
        Sin => "SIN",
        Slk => "SLK",
        Slv => "SLV",
        Som => "SOM",
        Sot => "SOT",
        Sun => "SUN",
        Swa => "SWA",
        Ssw => "SSW",
        Swe => "SWE",
        Tgl => "TGL",
        Tah => "TAH",
        Tgk => "TGK",
        Tam => "TAM",
        Tat => "TAT",
        Tel => "TEL",
        Tha => "THA",
        Bod => "BOD",
        Tir => "TIR",
        Ton => "TON",
        Tso => "TSO",
        Tsn => "TSN",
        Tur => "TUR",
        Tuk => "TUK",
        Twi => "TWI",
        Uig => "UIG",
        Ukr => "UKR",
        Uzb => "UZB",
        Ven => "VEN",
        Vol => "VOL",
        Wln => "WLN",
        Cym => "CYM",
        Fry => "FRY",
        Wol => "WOL",
        Xho => "XHO",
        Yid => "YID",
        Yor => "YOR",
        Zha => "ZHA",
        Zul => "ZUL",
        Orj => "ORJ",
        Qpc => "QPC",
        Tng => "TNG",
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codes() {
        assert_eq!("ENG".parse::<LanguageCode>().unwrap(), LanguageCode::Eng);
        assert_eq!(LanguageCode::Qaa.as_str(), "QAA");
        assert!("eng".parse::<LanguageCode>().is_err());
        assert!("EN".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(LanguageCode::ALL.len(), LanguageCode::values().len());
        assert_eq!(LanguageCode::ALL.first(), Some(&LanguageCode::Eng));
        assert_eq!(LanguageCode::ALL.last(), Some(&LanguageCode::Tng));
    }
}
