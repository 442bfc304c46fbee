mod tables_tests;
