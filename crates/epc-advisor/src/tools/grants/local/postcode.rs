//! Rough UK postcode handling: enough to place a property in a region
//! and, for the councils we carry, a local authority.

use super::catalog::{LocalAuthority, LOCAL_AUTHORITIES};
use crate::property::Region;
use regex::Regex;
use std::sync::OnceLock;

/// Upper-cased postcode minus its last three characters (the inward code).
///
/// Inputs shorter than four characters are taken to be an outward code
/// already.
pub fn outward_code(postcode: &str) -> String {
    let normalized: Vec<char> = postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    if normalized.len() < 4 {
        return normalized.into_iter().collect();
    }
    normalized[..normalized.len() - 3].iter().collect()
}

/// Leading letters of the outward code, e.g. `NW` for `NW1 6XE`.
pub fn postcode_area(postcode: &str) -> String {
    outward_code(postcode)
        .chars()
        .take_while(char::is_ascii_uppercase)
        .collect()
}

pub fn is_valid_uk_postcode(postcode: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]?\s?[0-9][A-Z]{2}$").ok())
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(postcode.trim()))
}

/// Region for a postcode area such as `M` or `BS`.
pub fn region_for_area(area: &str) -> Option<Region> {
    let region = match area {
        "E" | "EC" | "N" | "NW" | "SE" | "SW" | "W" | "WC" => Region::London,
        "BR" | "CR" | "DA" | "EN" | "HA" | "IG" | "KT" | "RM" | "SM" | "TW" | "UB" | "WD"
        | "BN" | "CT" | "GU" | "ME" | "MK" | "OX" | "PO" | "RG" | "RH" | "SL" | "SO" | "TN" => {
            Region::SouthEast
        }
        "BA" | "BH" | "BS" | "DT" | "EX" | "GL" | "PL" | "SN" | "SP" | "TA" | "TQ" | "TR" => {
            Region::SouthWest
        }
        "CB" | "CO" | "IP" | "NR" | "PE" | "SG" | "SS" | "CM" => Region::EastAnglia,
        "DE" | "DN" | "LE" | "LN" | "NG" | "NN" => Region::EastMidlands,
        "B" | "CV" | "DY" | "HR" | "ST" | "TF" | "WR" | "WS" | "WV" => Region::WestMidlands,
        "BB" | "BL" | "CA" | "CH" | "CW" | "FY" | "L" | "LA" | "M" | "OL" | "PR" | "SK" | "WA"
        | "WN" => Region::NorthWest,
        "DH" | "DL" | "NE" | "SR" | "TS" => Region::NorthEast,
        "BD" | "HD" | "HG" | "HU" | "HX" | "LS" | "S" | "WF" | "YO" => Region::Yorkshire,
        "CF" | "LD" | "LL" | "NP" | "SA" | "SY" => Region::Wales,
        "AB" | "DD" | "DG" | "EH" | "FK" | "G" | "HS" | "IV" | "KA" | "KW" | "KY" | "ML" | "PA"
        | "PH" | "TD" | "ZE" => Region::Scotland,
        "BT" => Region::NorthernIreland,
        _ => return None,
    };
    Some(region)
}

pub fn region_for_postcode(postcode: &str) -> Option<Region> {
    region_for_area(&postcode_area(postcode))
}

/// First council whose district prefixes match the outward code.
pub fn local_authority_for_postcode(postcode: &str) -> Option<&'static LocalAuthority> {
    let outward = outward_code(postcode);
    LOCAL_AUTHORITIES.iter().find(|authority| {
        authority
            .postcode_districts
            .iter()
            .any(|district| outward.starts_with(*district))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_outward_code_and_area() {
        assert_eq!(outward_code("m1 4bt"), "M1");
        assert_eq!(outward_code("NW1 6XE"), "NW1");
        assert_eq!(outward_code("SW1A1AA"), "SW1A");
        assert_eq!(outward_code("B15"), "B15");
        assert_eq!(postcode_area("NW1 6XE"), "NW");
        assert_eq!(postcode_area("B15"), "B");
        assert_eq!(postcode_area(""), "");
    }

    #[test]
    fn validates_postcode_shapes() {
        for valid in ["M1 4BT", "sw1a 1aa", "B152TT", " LS1 1UR "] {
            assert!(is_valid_uk_postcode(valid), "{valid}");
        }
        for invalid in ["", "M1", "12345", "ABC 123", "M1 4BTX"] {
            assert!(!is_valid_uk_postcode(invalid), "{invalid}");
        }
    }

    #[test]
    fn maps_areas_to_regions() {
        assert_eq!(region_for_postcode("M1 4BT"), Some(Region::NorthWest));
        assert_eq!(region_for_postcode("BS1 5TR"), Some(Region::SouthWest));
        assert_eq!(region_for_postcode("EH1 1YZ"), Some(Region::Scotland));
        assert_eq!(region_for_postcode("BT1 5GS"), Some(Region::NorthernIreland));
        assert_eq!(region_for_postcode("ZZ9 9ZZ"), None);
    }

    #[test]
    fn finds_councils_by_district_prefix() {
        let id = |postcode: &str| local_authority_for_postcode(postcode).map(|la| la.id);
        assert_eq!(id("M14 5TP"), Some("manchester"));
        assert_eq!(id("LS6 2AA"), Some("leeds"));
        assert_eq!(id("BS3 1AA"), Some("bristol"));
        assert_eq!(id("NW1 6XE"), Some("camden"));
        assert_eq!(id("OX1 1AA"), None);
    }
}
