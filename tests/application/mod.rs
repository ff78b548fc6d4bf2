mod generation_service_test;
