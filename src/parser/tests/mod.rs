mod technology_tests;
