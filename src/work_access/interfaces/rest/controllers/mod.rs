pub mod work_access_rest_controller;
