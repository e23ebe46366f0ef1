use serde::{Deserialize, Serialize};

/// The four ticket categories. The tag name doubles as the discount-rule key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TicketKind {
    SingleRacePass,
    WeekendPackage,
    SeasonMembership,
    /// `group_size` is informational; it never changes price or discount.
    GroupDiscount { group_size: u32 },
}

impl TicketKind {
    pub const ALL_TAGS: [&'static str; 4] = [
        "SingleRacePass",
        "WeekendPackage",
        "SeasonMembership",
        "GroupDiscount",
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TicketKind::SingleRacePass => "SingleRacePass",
            TicketKind::WeekendPackage => "WeekendPackage",
            TicketKind::SeasonMembership => "SeasonMembership",
            TicketKind::GroupDiscount { .. } => "GroupDiscount",
        }
    }

    /// Price the booking shell charges per ticket before discounts.
    pub fn list_price(&self) -> f64 {
        match self {
            TicketKind::SingleRacePass => 100.0,
            TicketKind::WeekendPackage => 180.0,
            TicketKind::SeasonMembership => 800.0,
            TicketKind::GroupDiscount { .. } => 400.0,
        }
    }

    /// Resolves a tag name. `group_size` is only used for `GroupDiscount`.
    pub fn from_tag(tag: &str, group_size: u32) -> Option<Self> {
        match tag {
            "SingleRacePass" => Some(TicketKind::SingleRacePass),
            "WeekendPackage" => Some(TicketKind::WeekendPackage),
            "SeasonMembership" => Some(TicketKind::SeasonMembership),
            "GroupDiscount" => Some(TicketKind::GroupDiscount { group_size }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    price: f64,
    #[serde(flatten)]
    kind: TicketKind,
}

impl Ticket {
    pub fn new(id: impl Into<String>, price: f64, kind: TicketKind) -> Self {
        Self {
            id: id.into(),
            price,
            kind,
        }
    }

    pub fn single_race_pass(id: impl Into<String>, price: f64) -> Self {
        Self::new(id, price, TicketKind::SingleRacePass)
    }

    pub fn weekend_package(id: impl Into<String>, price: f64) -> Self {
        Self::new(id, price, TicketKind::WeekendPackage)
    }

    pub fn season_membership(id: impl Into<String>, price: f64) -> Self {
        Self::new(id, price, TicketKind::SeasonMembership)
    }

    pub fn group_discount(id: impl Into<String>, price: f64, group_size: u32) -> Self {
        Self::new(id, price, TicketKind::GroupDiscount { group_size })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: TicketKind) {
        self.kind = kind;
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn group_size(&self) -> Option<u32> {
        match self.kind {
            TicketKind::GroupDiscount { group_size } => Some(group_size),
            _ => None,
        }
    }

    /// Returns false, changing nothing, when the ticket is not a group ticket.
    pub fn set_group_size(&mut self, size: u32) -> bool {
        match &mut self.kind {
            TicketKind::GroupDiscount { group_size } => {
                *group_size = size;
                true
            }
            _ => false,
        }
    }
}
