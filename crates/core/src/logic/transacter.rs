mod transacter_bootstrap;
mod transacter_run;
