// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_json_datasource;
        pub(crate) mod bills_store;
        pub(crate) mod in_memory_bills_store;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod bill_update_model;
        pub(crate) mod proof_upload_model;
        pub(crate) mod raw_bill_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod new_bill;
        pub(crate) mod route;
        pub(crate) mod session;
        pub(crate) mod view_state;
    }
    pub(crate) mod logic {
        pub(crate) mod bill_formatter;
        pub(crate) mod new_bill_validator;
        pub(crate) mod proof_file_validator;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod bills_usecase;
        pub(crate) mod new_bill_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod bills_ui;
    pub(crate) mod new_bill_ui;
    pub(crate) mod status_pages;
    pub(crate) mod utils;
    pub(crate) mod vertical_layout;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::new_bill::*;
        pub use crate::domain::entities::route::*;
        pub use crate::domain::entities::session::*;
        pub use crate::domain::entities::view_state::*;
    }

    pub mod formatter {
        pub use crate::domain::logic::bill_formatter::{format_bills, format_date, format_status};
    }

    pub mod store {
        pub use crate::data::datasources::bills_store::*;
        pub use crate::data::datasources::in_memory_bills_store::*;
        pub use crate::data::models::bill_update_model::*;
        pub use crate::data::models::proof_upload_model::*;
        pub use crate::data::models::raw_bill_model::*;
    }
}
