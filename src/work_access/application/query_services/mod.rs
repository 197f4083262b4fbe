pub mod work_access_query_service_impl;
