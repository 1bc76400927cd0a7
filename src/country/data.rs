//! ISO 3166-1 country records.
//!
//! Names are not stored here; every record resolves its name through the
//! translation tables by alpha-3 code.

use super::Country;
use phf::{Map, phf_map};

macro_rules! define_countries {
    ($( $id:ident = $alpha3:literal, $alpha2:literal, $numeric:literal; )*) => {
        $(
            pub const $id: Country = Country::localized($alpha2, $alpha3, $numeric);
        )*

        /// Every record, in the order of the English short names.
        pub static COUNTRIES: &[Country] = &[$($id),*];

        pub static BY_ALPHA2: Map<&'static str, Country> = phf_map! {
            $( $alpha2 => $id ),*
        };

        pub static BY_ALPHA3: Map<&'static str, Country> = phf_map! {
            $( $alpha3 => $id ),*
        };
    };
}

define_countries! {
    AFG = "AFG", "AF", 4;
    ALA = "ALA", "AX", 248;
    ALB = "ALB", "AL", 8;
    DZA = "DZA", "DZ", 12;
    ASM = "ASM", "AS", 16;
    AND = "AND", "AD", 20;
    AGO = "AGO", "AO", 24;
    AIA = "AIA", "AI", 660;
    ATA = "ATA", "AQ", 10;
    ATG = "ATG", "AG", 28;
    ARG = "ARG", "AR", 32;
    ARM = "ARM", "AM", 51;
    ABW = "ABW", "AW", 533;
    AUS = "AUS", "AU", 36;
    AUT = "AUT", "AT", 40;
    AZE = "AZE", "AZ", 31;
    BHS = "BHS", "BS", 44;
    BHR = "BHR", "BH", 48;
    BGD = "BGD", "BD", 50;
    BRB = "BRB", "BB", 52;
    BLR = "BLR", "BY", 112;
    BEL = "BEL", "BE", 56;
    BLZ = "BLZ", "BZ", 84;
    BEN = "BEN", "BJ", 204;
    BMU = "BMU", "BM", 60;
    BTN = "BTN", "BT", 64;
    BOL = "BOL", "BO", 68;
    BES = "BES", "BQ", 535;
    BIH = "BIH", "BA", 70;
    BWA = "BWA", "BW", 72;
    BVT = "BVT", "BV", 74;
    BRA = "BRA", "BR", 76;
    IOT = "IOT", "IO", 86;
    BRN = "BRN", "BN", 96;
    BGR = "BGR", "BG", 100;
    BFA = "BFA", "BF", 854;
    BDI = "BDI", "BI", 108;
    CPV = "CPV", "CV", 132;
    KHM = "KHM", "KH", 116;
    CMR = "CMR", "CM", 120;
    CAN = "CAN", "CA", 124;
    CYM = "CYM", "KY", 136;
    CAF = "CAF", "CF", 140;
    TCD = "TCD", "TD", 148;
    CHL = "CHL", "CL", 152;
    CHN = "CHN", "CN", 156;
    CXR = "CXR", "CX", 162;
    CCK = "CCK", "CC", 166;
    COL = "COL", "CO", 170;
    COM = "COM", "KM", 174;
    COG = "COG", "CG", 178;
    COD = "COD", "CD", 180;
    COK = "COK", "CK", 184;
    CRI = "CRI", "CR", 188;
    CIV = "CIV", "CI", 384;
    HRV = "HRV", "HR", 191;
    CUB = "CUB", "CU", 192;
    CUW = "CUW", "CW", 531;
    CYP = "CYP", "CY", 196;
    CZE = "CZE", "CZ", 203;
    DNK = "DNK", "DK", 208;
    DJI = "DJI", "DJ", 262;
    DMA = "DMA", "DM", 212;
    DOM = "DOM", "DO", 214;
    ECU = "ECU", "EC", 218;
    EGY = "EGY", "EG", 818;
    SLV = "SLV", "SV", 222;
    GNQ = "GNQ", "GQ", 226;
    ERI = "ERI", "ER", 232;
    EST = "EST", "EE", 233;
    ETH = "ETH", "ET", 231;
    FLK = "FLK", "FK", 238;
    FRO = "FRO", "FO", 234;
    FJI = "FJI", "FJ", 242;
    FIN = "FIN", "FI", 246;
    FRA = "FRA", "FR", 250;
    GUF = "GUF", "GF", 254;
    PYF = "PYF", "PF", 258;
    ATF = "ATF", "TF", 260;
    GAB = "GAB", "GA", 266;
    GMB = "GMB", "GM", 270;
    GEO = "GEO", "GE", 268;
    DEU = "DEU", "DE", 276;
    GHA = "GHA", "GH", 288;
    GIB = "GIB", "GI", 292;
    GRC = "GRC", "GR", 300;
    GRL = "GRL", "GL", 304;
    GRD = "GRD", "GD", 308;
    GLP = "GLP", "GP", 312;
    GUM = "GUM", "GU", 316;
    GTM = "GTM", "GT", 320;
    GGY = "GGY", "GG", 831;
    GIN = "GIN", "GN", 324;
    GNB = "GNB", "GW", 624;
    GUY = "GUY", "GY", 328;
    HTI = "HTI", "HT", 332;
    HMD = "HMD", "HM", 334;
    VAT = "VAT", "VA", 336;
    HND = "HND", "HN", 340;
    HKG = "HKG", "HK", 344;
    HUN = "HUN", "HU", 348;
    ISL = "ISL", "IS", 352;
    IND = "IND", "IN", 356;
    IDN = "IDN", "ID", 360;
    IRN = "IRN", "IR", 364;
    IRQ = "IRQ", "IQ", 368;
    IRL = "IRL", "IE", 372;
    IMN = "IMN", "IM", 833;
    ISR = "ISR", "IL", 376;
    ITA = "ITA", "IT", 380;
    JAM = "JAM", "JM", 388;
    JPN = "JPN", "JP", 392;
    JEY = "JEY", "JE", 832;
    JOR = "JOR", "JO", 400;
    KAZ = "KAZ", "KZ", 398;
    KEN = "KEN", "KE", 404;
    KIR = "KIR", "KI", 296;
    PRK = "PRK", "KP", 408;
    KOR = "KOR", "KR", 410;
    KWT = "KWT", "KW", 414;
    KGZ = "KGZ", "KG", 417;
    LAO = "LAO", "LA", 418;
    LVA = "LVA", "LV", 428;
    LBN = "LBN", "LB", 422;
    LSO = "LSO", "LS", 426;
    LBR = "LBR", "LR", 430;
    LBY = "LBY", "LY", 434;
    LIE = "LIE", "LI", 438;
    LTU = "LTU", "LT", 440;
    LUX = "LUX", "LU", 442;
    MAC = "MAC", "MO", 446;
    MKD = "MKD", "MK", 807;
    MDG = "MDG", "MG", 450;
    MWI = "MWI", "MW", 454;
    MYS = "MYS", "MY", 458;
    MDV = "MDV", "MV", 462;
    MLI = "MLI", "ML", 466;
    MLT = "MLT", "MT", 470;
    MHL = "MHL", "MH", 584;
    MTQ = "MTQ", "MQ", 474;
    MRT = "MRT", "MR", 478;
    MUS = "MUS", "MU", 480;
    MYT = "MYT", "YT", 175;
    MEX = "MEX", "MX", 484;
    FSM = "FSM", "FM", 583;
    MDA = "MDA", "MD", 498;
    MCO = "MCO", "MC", 492;
    MNG = "MNG", "MN", 496;
    MNE = "MNE", "ME", 499;
    MSR = "MSR", "MS", 500;
    MAR = "MAR", "MA", 504;
    MOZ = "MOZ", "MZ", 508;
    MMR = "MMR", "MM", 104;
    NAM = "NAM", "NA", 516;
    NRU = "NRU", "NR", 520;
    NPL = "NPL", "NP", 524;
    NLD = "NLD", "NL", 528;
    NCL = "NCL", "NC", 540;
    NZL = "NZL", "NZ", 554;
    NIC = "NIC", "NI", 558;
    NER = "NER", "NE", 562;
    NGA = "NGA", "NG", 566;
    NIU = "NIU", "NU", 570;
    NFK = "NFK", "NF", 574;
    MNP = "MNP", "MP", 580;
    NOR = "NOR", "NO", 578;
    OMN = "OMN", "OM", 512;
    PAK = "PAK", "PK", 586;
    PLW = "PLW", "PW", 585;
    PSE = "PSE", "PS", 275;
    PAN = "PAN", "PA", 591;
    PNG = "PNG", "PG", 598;
    PRY = "PRY", "PY", 600;
    PER = "PER", "PE", 604;
    PHL = "PHL", "PH", 608;
    PCN = "PCN", "PN", 612;
    POL = "POL", "PL", 616;
    PRT = "PRT", "PT", 620;
    PRI = "PRI", "PR", 630;
    QAT = "QAT", "QA", 634;
    REU = "REU", "RE", 638;
    ROU = "ROU", "RO", 642;
    RUS = "RUS", "RU", 643;
    RWA = "RWA", "RW", 646;
    BLM = "BLM", "BL", 652;
    SHN = "SHN", "SH", 654;
    KNA = "KNA", "KN", 659;
    LCA = "LCA", "LC", 662;
    MAF = "MAF", "MF", 663;
    SPM = "SPM", "PM", 666;
    VCT = "VCT", "VC", 670;
    WSM = "WSM", "WS", 882;
    SMR = "SMR", "SM", 674;
    STP = "STP", "ST", 678;
    SAU = "SAU", "SA", 682;
    SEN = "SEN", "SN", 686;
    SRB = "SRB", "RS", 688;
    SYC = "SYC", "SC", 690;
    SLE = "SLE", "SL", 694;
    SGP = "SGP", "SG", 702;
    SXM = "SXM", "SX", 534;
    SVK = "SVK", "SK", 703;
    SVN = "SVN", "SI", 705;
    SLB = "SLB", "SB", 90;
    SOM = "SOM", "SO", 706;
    ZAF = "ZAF", "ZA", 710;
    SGS = "SGS", "GS", 239;
    SSD = "SSD", "SS", 728;
    ESP = "ESP", "ES", 724;
    LKA = "LKA", "LK", 144;
    SDN = "SDN", "SD", 729;
    SUR = "SUR", "SR", 740;
    SJM = "SJM", "SJ", 744;
    SWZ = "SWZ", "SZ", 748;
    SWE = "SWE", "SE", 752;
    CHE = "CHE", "CH", 756;
    SYR = "SYR", "SY", 760;
    TWN = "TWN", "TW", 158;
    TJK = "TJK", "TJ", 762;
    TZA = "TZA", "TZ", 834;
    THA = "THA", "TH", 764;
    TLS = "TLS", "TL", 626;
    TGO = "TGO", "TG", 768;
    TKL = "TKL", "TK", 772;
    TON = "TON", "TO", 776;
    TTO = "TTO", "TT", 780;
    TUN = "TUN", "TN", 788;
    TUR = "TUR", "TR", 792;
    TKM = "TKM", "TM", 795;
    TCA = "TCA", "TC", 796;
    TUV = "TUV", "TV", 798;
    UGA = "UGA", "UG", 800;
    UKR = "UKR", "UA", 804;
    ARE = "ARE", "AE", 784;
    GBR = "GBR", "GB", 826;
    USA = "USA", "US", 840;
    UMI = "UMI", "UM", 581;
    URY = "URY", "UY", 858;
    UZB = "UZB", "UZ", 860;
    VUT = "VUT", "VU", 548;
    VEN = "VEN", "VE", 862;
    VNM = "VNM", "VN", 704;
    VGB = "VGB", "VG", 92;
    VIR = "VIR", "VI", 850;
    WLF = "WLF", "WF", 876;
    ESH = "ESH", "EH", 732;
    YEM = "YEM", "YE", 887;
    ZMB = "ZMB", "ZM", 894;
    ZWE = "ZWE", "ZW", 716;
}
