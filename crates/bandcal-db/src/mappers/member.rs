//! Member entity <-> model mapper

use bandcal_core::entities::Member;
use bandcal_core::value_objects::MemberId;

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            name: model.name,
            instrument: model.instrument,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
