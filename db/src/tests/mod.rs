mod storage_tests;
