mod connectivity;
mod range_queries;
