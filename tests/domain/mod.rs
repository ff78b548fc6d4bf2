mod ai_provider_test;
