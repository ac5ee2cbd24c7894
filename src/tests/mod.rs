use crate::input::SourceDump;


pub(crate) fn backend_dump() -> SourceDump {
    SourceDump::new(
        "campor-backend.txt",
        r#"# Campor Backend

Campor is a campus marketplace for students to buy and sell second-hand goods.

{
  "dependencies": {
    "express": "4.18.0",
    "cors": "2.8.5",
    "@supabase/supabase-js": "2.39.0"
  },
  "devDependencies": {
    "nodemon": "3.0.1"
  }
}

Repository: https://github.com/acme/campor-api.git
"#,
    )
}

pub(crate) fn frontend_dump() -> SourceDump {
    SourceDump::new(
        "campor-frontend.txt",
        r#"{
  "dependencies": {
    "react": "18.2.0",
    "next": "14.0.4"
  }
}

## Features

- Campus-verified student accounts for safe trading
- Realtime chat between buyers and sellers
- Price suggestions based on recent campus sales
"#,
    )
}
