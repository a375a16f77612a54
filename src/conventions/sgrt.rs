//! SGRT file naming convention.
//!
//! Fixed-width fields, padded with `-`, e.g.
//! `M20170725_165004--_SIG0-----_S1BIWGRDH1VVA_146_A0104_EU500M_E048N012T6.tif`.

use chrono::NaiveTime;

use crate::error::Result;
use crate::naming::{Codec, Convention, DerivedProperty, FieldSpec, FieldValue, FieldView};

pub const NAME: &str = "sgrt";

pub fn convention() -> Result<Convention> {
    Convention::builder(NAME)
        .field(FieldSpec::fixed("pflag", 1).optional())
        .field(
            FieldSpec::fixed("dtime_1", 8)
                .no_delimiter()
                .codec(Codec::date("%Y%m%d"))
                .optional(),
        )
        .field(FieldSpec::fixed("dtime_2", 8).optional())
        .field(FieldSpec::fixed("var_name", 9).optional())
        .field(FieldSpec::fixed("mission_id", 2).optional())
        .field(FieldSpec::fixed("spacecraft_id", 1).no_delimiter().optional())
        .field(FieldSpec::fixed("mode_id", 2).no_delimiter().optional())
        .field(FieldSpec::fixed("product_type", 3).no_delimiter().optional())
        .field(FieldSpec::fixed("res_class", 1).no_delimiter().optional())
        .field(FieldSpec::fixed("level", 1).no_delimiter().optional())
        .field(FieldSpec::fixed("pol", 2).no_delimiter().optional())
        .field(FieldSpec::fixed("orbit_direction", 1).no_delimiter().optional())
        .field(
            FieldSpec::fixed("relative_orbit", 3)
                .codec(Codec::integer(3))
                .optional(),
        )
        .field(FieldSpec::fixed("workflow_id", 5).optional())
        .field(FieldSpec::fixed("grid_name", 6).optional())
        .field(FieldSpec::fixed("tile_name", 10).optional())
        .derived(DerivedProperty::concat(
            "product_id",
            &["mission_id", "spacecraft_id", "mode_id", "product_type", "res_class"],
            "",
        ))
        .derived(DerivedProperty::concat("ftile", &["grid_name", "tile_name"], "_"))
        .derived(DerivedProperty::new("start_time", start_time))
        .extension(".tif")
        .build()
}

// dtime_1 carries the date, dtime_2 the time of day as HHMMSS.
fn start_time(view: &FieldView<'_>) -> Result<Option<FieldValue>> {
    let (Some(date), Some(time)) = (view.get("dtime_1")?, view.get("dtime_2")?) else {
        return Ok(None);
    };
    let Some(date) = date.as_date() else {
        return Ok(None);
    };

    Ok(NaiveTime::parse_from_str(&time.to_string(), "%H%M%S")
        .ok()
        .map(|time| FieldValue::DateTime(date.and_time(time))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{FieldMap, SmartFilename};
    use chrono::NaiveDate;
    use std::sync::Arc;

    const EXAMPLE: &str =
        "M20170725_165004--_SIG0-----_S1BIWGRDH1VVA_146_A0104_EU500M_E048N012T6.tif";

    #[test]
    fn test_parse_example() {
        let name = SmartFilename::parse(Arc::new(convention().unwrap()), EXAMPLE).unwrap();

        assert_eq!(name.get("pflag").unwrap(), Some(&FieldValue::from("M")));
        assert_eq!(
            name.get("dtime_1").unwrap(),
            Some(&FieldValue::Date(NaiveDate::from_ymd_opt(2017, 7, 25).unwrap()))
        );
        assert_eq!(name.get_str("dtime_2").unwrap(), "165004");
        assert_eq!(name.get("var_name").unwrap(), Some(&FieldValue::from("SIG0")));
        assert_eq!(name.get("pol").unwrap(), Some(&FieldValue::from("VV")));
        assert_eq!(
            name.get("orbit_direction").unwrap(),
            Some(&FieldValue::from("A"))
        );
        assert_eq!(
            name.get("relative_orbit").unwrap(),
            Some(&FieldValue::Integer(146))
        );
        assert_eq!(
            name.get("tile_name").unwrap(),
            Some(&FieldValue::from("E048N012T6"))
        );
        assert_eq!(name.encoded(), EXAMPLE);
    }

    #[test]
    fn test_derived_properties() {
        let name = SmartFilename::parse(Arc::new(convention().unwrap()), EXAMPLE).unwrap();

        assert_eq!(
            name.property("product_id").unwrap(),
            Some(FieldValue::from("S1BIWGRDH"))
        );
        assert_eq!(
            name.property("ftile").unwrap(),
            Some(FieldValue::from("EU500M_E048N012T6"))
        );
        let expected = NaiveDate::from_ymd_opt(2017, 7, 25)
            .unwrap()
            .and_hms_opt(16, 50, 4)
            .unwrap();
        assert_eq!(
            name.property("start_time").unwrap(),
            Some(FieldValue::DateTime(expected))
        );
    }

    #[test]
    fn test_absent_fields_are_padded() {
        let mut values = FieldMap::new();
        values.insert("pflag".into(), "M".into());
        values.insert("var_name".into(), "SSM".into());

        let name = SmartFilename::new(Arc::new(convention().unwrap()), values).unwrap();
        assert_eq!(
            name.encoded(),
            "M--------_--------_SSM------_-------------_---_-----_------_----------.tif"
        );
        assert_eq!(name.property("product_id").unwrap(), None);
    }

    #[test]
    fn test_truncated_name_rejected() {
        let conv = convention().unwrap();
        assert!(conv.decode("M20170725_165004--_SIG0-----.tif").unwrap_err().is_parse());
    }
}
