pub mod use_paginated_query;
pub mod use_revalidation;

pub use use_paginated_query::use_paginated_query;
pub use use_revalidation::use_revalidation;
