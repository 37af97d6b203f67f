// ── Built-in default content ──
//
// What the store holds on first run and after a reset.

use crate::model::{
    Asn, AsnStatus, Coordinates, EnabledSite, GlobalFabricStats, Latency, Location, NetworkStats,
    PeeringPolicy, Service, SiteStatus,
};

pub fn network_stats() -> NetworkStats {
    NetworkStats {
        global_latency: Latency {
            value: 0.4,
            unit: "ms".into(),
        },
        active_nodes: 4921,
        throughput: 124,
    }
}

pub fn global_fabric_stats() -> GlobalFabricStats {
    GlobalFabricStats {
        total_capacity: "5.2 Tbps".into(),
        active_routes: "10,000+".into(),
        avg_latency: "<5ms".into(),
        global_coverage: "100%".into(),
    }
}

/// The services catalog ships empty; editors populate it.
pub fn services() -> Vec<Service> {
    Vec::new()
}

fn asn(asn_number: u32, name: &str, peering_policy: PeeringPolicy, status: AsnStatus) -> Asn {
    Asn {
        asn_number,
        name: name.into(),
        macro_name: String::new(),
        peering_policy,
        status,
    }
}

fn site(id: &str, name: &str, provider: &str, address: &str, status: SiteStatus) -> EnabledSite {
    EnabledSite {
        id: id.into(),
        name: name.into(),
        provider: provider.into(),
        address: address.into(),
        status,
    }
}

#[allow(clippy::too_many_lines)]
pub fn locations() -> Vec<Location> {
    vec![
        Location {
            id: "nyc".into(),
            name: "New York".into(),
            coordinates: Coordinates::new(-74.006, 40.7128),
            code: "NYC_CORE".into(),
            region: "AMERICAS".into(),
            asns: 41,
            sites: 7,
            asn_list: vec![
                asn(
                    18885,
                    "M2ngage Telecommunications Corp.",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
                asn(
                    46475,
                    "Limestone Networks, Inc.",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
                asn(
                    209,
                    "CenturyLink Communications, LLC",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    7018,
                    "AT&T Services, Inc.",
                    PeeringPolicy::Restrictive,
                    AsnStatus::Active,
                ),
            ],
            enabled_sites: vec![
                site(
                    "nyc-1",
                    "CoreSite NY1",
                    "CoreSite",
                    "32 Avenue of the Americas, Manhattan, NYC",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-2",
                    "CoreSite Secaucus (NY2)",
                    "CoreSite",
                    "2 Emerson Lane, Secaucus, NJ 07094 USA",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-3",
                    "DataBank NYC1/LGA1",
                    "DataBank",
                    "60 Hudson Street, Manhattan, NYC",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-4",
                    "DataBank NYC2/LGA2",
                    "DataBank",
                    "111 8th Avenue, Manhattan, NYC",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-5",
                    "DataVerge Brooklyn",
                    "DataVerge",
                    "882 3rd Avenue Brooklyn, NY, 11232 USA",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-6",
                    "Digital Realty NY JFK10",
                    "Digital Realty",
                    "111 8th Avenue, Manhattan, NYC",
                    SiteStatus::Available,
                ),
                site(
                    "nyc-7",
                    "Digital Realty NY JFK12",
                    "Digital Realty",
                    "60 Hudson Street, Manhattan, NYC",
                    SiteStatus::Available,
                ),
            ],
        },
        Location {
            id: "ams".into(),
            name: "Amsterdam".into(),
            coordinates: Coordinates::new(4.9041, 52.3676),
            code: "AMS_IX".into(),
            region: "EUROPE".into(),
            asns: 89,
            sites: 5,
            asn_list: vec![
                asn(1103, "SURF B.V.", PeeringPolicy::Open, AsnStatus::Active),
                asn(
                    3356,
                    "Lumen Technologies",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    6939,
                    "Hurricane Electric LLC",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    8767,
                    "M247 Europe SRL",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
            ],
            enabled_sites: vec![
                site(
                    "ams-1",
                    "Equinix AM7",
                    "Equinix",
                    "Kuiperbergweg 87, 1101 AG Amsterdam",
                    SiteStatus::Available,
                ),
                site(
                    "ams-2",
                    "Digital Realty AMS1",
                    "Digital Realty",
                    "Radarweg 29, 1043 NX Amsterdam",
                    SiteStatus::Available,
                ),
                site(
                    "ams-3",
                    "Interxion AMS8",
                    "Interxion",
                    "Tarnweiweg 10, 1118 DE Schiphol",
                    SiteStatus::Available,
                ),
                site(
                    "ams-4",
                    "GlobalSwitch Amsterdam",
                    "GlobalSwitch",
                    "Naritaweg 151, 1043 BW Amsterdam",
                    SiteStatus::Available,
                ),
                site(
                    "ams-5",
                    "NorthC Aalsmeer",
                    "NorthC",
                    "Dreef 1, 1431 WK Aalsmeer",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "frk".into(),
            name: "Frankfurt".into(),
            coordinates: Coordinates::new(8.6821, 50.1109),
            code: "FRA_HUB".into(),
            region: "EUROPE".into(),
            asns: 94,
            sites: 5,
            asn_list: vec![
                asn(
                    3320,
                    "Deutsche Telekom AG",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    8422,
                    "NetCologne GmbH",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    20940,
                    "Akamai International B.V.",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
            ],
            enabled_sites: vec![
                site(
                    "frk-1",
                    "Interxion FRA1",
                    "Interxion",
                    "Hanauer Landstraße 302, 60314 Frankfurt",
                    SiteStatus::Available,
                ),
                site(
                    "frk-2",
                    "Equinix FR5",
                    "Equinix",
                    "Lärchenstraße 110, 65933 Frankfurt",
                    SiteStatus::Available,
                ),
                site(
                    "frk-3",
                    "Digital Realty FRA1",
                    "Digital Realty",
                    "Lyoner Straße 28, 60528 Frankfurt",
                    SiteStatus::Available,
                ),
                site(
                    "frk-4",
                    "NTT Frankfurt 1",
                    "NTT",
                    "Mainzer Landstraße 250, 60326 Frankfurt",
                    SiteStatus::Available,
                ),
                site(
                    "frk-5",
                    "e-shelter Frankfurt",
                    "e-shelter",
                    "Carl-Benz-Str. 11, 60386 Frankfurt",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "bom".into(),
            name: "Mumbai".into(),
            coordinates: Coordinates::new(72.8777, 19.076),
            code: "BOM_WEST".into(),
            region: "ASIA".into(),
            asns: 34,
            sites: 3,
            asn_list: vec![
                asn(
                    9498,
                    "Bharti Airtel Ltd.",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    45609,
                    "Tata Teleservices (Maharashtra) Limited",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    55410,
                    "Vodafone Idea Limited",
                    PeeringPolicy::Restrictive,
                    AsnStatus::Connecting,
                ),
            ],
            enabled_sites: vec![
                site(
                    "bom-1",
                    "GPX Mumbai 1",
                    "GPX",
                    "Powai, Mumbai 400076",
                    SiteStatus::Available,
                ),
                site(
                    "bom-2",
                    "Netmagic DC2",
                    "Netmagic",
                    "Airoli, Navi Mumbai 400708",
                    SiteStatus::Available,
                ),
                site(
                    "bom-3",
                    "STT Mumbai",
                    "STT GDC",
                    "Navi Mumbai, Maharashtra 400709",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "sin".into(),
            name: "Singapore".into(),
            coordinates: Coordinates::new(103.8198, 1.3521),
            code: "SIN_NODE".into(),
            region: "ASIA".into(),
            asns: 67,
            sites: 4,
            asn_list: vec![
                asn(
                    3758,
                    "SingNet Pte Ltd",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    7473,
                    "Singapore Telecommunications",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(10026, "StarHub Ltd", PeeringPolicy::Open, AsnStatus::Active),
            ],
            enabled_sites: vec![
                site(
                    "sin-1",
                    "Global Switch Singapore",
                    "GlobalSwitch",
                    "18 Tai Seng Street, Singapore 539775",
                    SiteStatus::Available,
                ),
                site(
                    "sin-2",
                    "Equinix SG1",
                    "Equinix",
                    "20 Ayer Rajah Crescent, Singapore 139964",
                    SiteStatus::Available,
                ),
                site(
                    "sin-3",
                    "Digital Realty SIN10",
                    "Digital Realty",
                    "29A International Business Park, Singapore",
                    SiteStatus::Available,
                ),
                site(
                    "sin-4",
                    "STT Loyang",
                    "STT GDC",
                    "Loyang Offshore Supply Base, Singapore",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "hkg".into(),
            name: "Hong Kong".into(),
            coordinates: Coordinates::new(114.1694, 22.3193),
            code: "HKG_EAST".into(),
            region: "ASIA".into(),
            asns: 45,
            sites: 3,
            asn_list: vec![
                asn(
                    4637,
                    "PCCW Global",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    9930,
                    "HKBN Enterprise Solutions",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    10026,
                    "Pacnet Services",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
            ],
            enabled_sites: vec![
                site(
                    "hkg-1",
                    "MEGA-i",
                    "SUNeVision",
                    "399 Chai Wan Road, Chai Wan, Hong Kong",
                    SiteStatus::Available,
                ),
                site(
                    "hkg-2",
                    "Equinix HK1",
                    "Equinix",
                    "17/F, Sha Tin Industrial Centre, Hong Kong",
                    SiteStatus::Available,
                ),
                site(
                    "hkg-3",
                    "Global Switch Hong Kong",
                    "GlobalSwitch",
                    "18 Chun Yat Street, Tseung Kwan O",
                    SiteStatus::Available,
                ),
            ],
        },
        Location {
            id: "tyo".into(),
            name: "Tokyo".into(),
            coordinates: Coordinates::new(139.6917, 35.6895),
            code: "TYO_CNTR".into(),
            region: "ASIA".into(),
            asns: 52,
            sites: 3,
            asn_list: vec![
                asn(
                    2516,
                    "KDDI CORPORATION",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    4713,
                    "NTT Communications Corporation",
                    PeeringPolicy::Restrictive,
                    AsnStatus::Active,
                ),
                asn(
                    17506,
                    "SOFTBANK CORP.",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
            ],
            enabled_sites: vec![
                site(
                    "tyo-1",
                    "Equinix TY11",
                    "Equinix",
                    "3-8-21 Higashi-Shinagawa, Tokyo 140-0002",
                    SiteStatus::Available,
                ),
                site(
                    "tyo-2",
                    "NTT Tokyo CC2",
                    "NTT",
                    "Otemachi, Chiyoda-ku, Tokyo",
                    SiteStatus::Available,
                ),
                site(
                    "tyo-3",
                    "Digital Realty NRT1",
                    "Digital Realty",
                    "Inzai, Chiba 270-1609",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "maa".into(),
            name: "Chennai".into(),
            coordinates: Coordinates::new(80.2707, 13.0827),
            code: "MAA_SOUTH".into(),
            region: "ASIA".into(),
            asns: 28,
            sites: 4,
            asn_list: vec![
                asn(
                    9498,
                    "Bharti Airtel Ltd.",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    4755,
                    "Tata Communications Ltd",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    55410,
                    "Vodafone Idea Limited",
                    PeeringPolicy::Restrictive,
                    AsnStatus::Connecting,
                ),
                asn(
                    45820,
                    "BSNL - Bharat Sanchar Nigam Ltd.",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    17747,
                    "SIFY Technologies Ltd.",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
            ],
            enabled_sites: vec![
                site(
                    "maa-1",
                    "STT Chennai 1",
                    "STT GDC",
                    "Ambattur Industrial Estate, Chennai 600058",
                    SiteStatus::Available,
                ),
                site(
                    "maa-2",
                    "NTT Chennai DC",
                    "NTT",
                    "SIPCOT IT Park, Siruseri, Chennai 603103",
                    SiteStatus::Available,
                ),
                site(
                    "maa-3",
                    "CtrlS Chennai",
                    "CtrlS",
                    "Sholinganallur, Chennai 600119",
                    SiteStatus::Available,
                ),
                site(
                    "maa-4",
                    "Sify Noida DC",
                    "Sify",
                    "Navallur, Chennai 600130",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "del".into(),
            name: "Delhi".into(),
            coordinates: Coordinates::new(77.2090, 28.6139),
            code: "DEL_NORTH".into(),
            region: "ASIA".into(),
            asns: 32,
            sites: 5,
            asn_list: vec![
                asn(
                    9498,
                    "Bharti Airtel Ltd.",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    4755,
                    "Tata Communications Ltd",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    45820,
                    "BSNL - Bharat Sanchar Nigam Ltd.",
                    PeeringPolicy::Open,
                    AsnStatus::Active,
                ),
                asn(
                    17488,
                    "Hathway Cable and Datacom Ltd.",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
                asn(
                    55836,
                    "Reliance Jio Infocomm Limited",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
            ],
            enabled_sites: vec![
                site(
                    "del-1",
                    "NTT Delhi DC",
                    "NTT",
                    "Sector 142, Noida, Uttar Pradesh 201304",
                    SiteStatus::Available,
                ),
                site(
                    "del-2",
                    "STT Delhi 1",
                    "STT GDC",
                    "Mahipalpur Extension, New Delhi 110037",
                    SiteStatus::Available,
                ),
                site(
                    "del-3",
                    "CtrlS Noida",
                    "CtrlS",
                    "Knowledge Park III, Greater Noida 201306",
                    SiteStatus::Available,
                ),
                site(
                    "del-4",
                    "Netmagic Delhi DC",
                    "Netmagic",
                    "Sector 62, Noida, UP 201309",
                    SiteStatus::Available,
                ),
                site(
                    "del-5",
                    "Yotta Noida",
                    "Yotta",
                    "Greater Noida, UP 201306",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
        Location {
            id: "dxb".into(),
            name: "Dubai".into(),
            coordinates: Coordinates::new(55.2708, 25.2048),
            code: "DXB_GULF".into(),
            region: "MIDDLE EAST".into(),
            asns: 25,
            sites: 4,
            asn_list: vec![
                asn(
                    5384,
                    "Emirates Telecommunications Corporation (Etisalat)",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    8966,
                    "Emirates Integrated Telecommunications Company (du)",
                    PeeringPolicy::Selective,
                    AsnStatus::Active,
                ),
                asn(
                    15802,
                    "Ooredoo Q.S.C.",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
                asn(35753, "Omantel", PeeringPolicy::Open, AsnStatus::Active),
                asn(
                    51847,
                    "Gulf Bridge International",
                    PeeringPolicy::Open,
                    AsnStatus::Connecting,
                ),
            ],
            enabled_sites: vec![
                site(
                    "dxb-1",
                    "Equinix DX1",
                    "Equinix",
                    "Dubai Silicon Oasis, Dubai, UAE",
                    SiteStatus::Available,
                ),
                site(
                    "dxb-2",
                    "Khazna Data Center",
                    "Khazna",
                    "Masdar City, Abu Dhabi, UAE",
                    SiteStatus::Available,
                ),
                site(
                    "dxb-3",
                    "Gulf Data Hub",
                    "GDH",
                    "Sheikh Zayed Road, Dubai, UAE",
                    SiteStatus::Available,
                ),
                site(
                    "dxb-4",
                    "Moro Hub",
                    "Moro",
                    "DWTC, Dubai, UAE",
                    SiteStatus::ComingSoon,
                ),
            ],
        },
    ]
}
