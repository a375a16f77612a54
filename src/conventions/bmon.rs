//! BMon file naming convention, e.g. `BMON_DM_ENSEMBLE_500m_20160101120000_v1.nc`.

use crate::error::Result;
use crate::naming::{Codec, Convention, FieldSpec};

pub const NAME: &str = "bmon";

pub fn convention() -> Result<Convention> {
    Convention::builder(NAME)
        .field(FieldSpec::fixed("var_name", 16).optional())
        .field(FieldSpec::fixed("sres", 4).optional())
        .field(
            FieldSpec::fixed("timestamp", 14)
                .codec(Codec::datetime("%Y%m%d%H%M%S"))
                .optional(),
        )
        .field(FieldSpec::fixed("version", 2).optional())
        .extension(".nc")
        .build()
}
