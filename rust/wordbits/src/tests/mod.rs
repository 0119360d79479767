mod popcount_tests;
