//! The chat widget served at `GET /`.
//!
//! One self-contained page with inline CSS and JavaScript. The welcome banner
//! and the quick-reply buttons live entirely in the browser; both free-typed
//! and quick-reply messages go through the same `POST /chat` call and the
//! page renders `reply` from the response body whatever the status code.

/// The complete HTML page.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Abtrow AI – Study Abroad Assistant</title>
  <style>
    body { 
        font-family: system-ui, -apple-system, BlinkMacSystemFont, sans-serif;
        max-width: 780px; 
        margin: 20px auto; 
        padding: 0 12px; 
        background: #0A1A3A;  /* Abtrow Navy Blue */
        color: #F5F5F5;
    }

    #header {
        display: flex;
        align-items: center;
        justify-content: flex-start;
        gap: 12px;
        margin-bottom: 12px;
    }

    #header-logo {
        width: 56px;
        height: 56px;
        border-radius: 999px;
        overflow: hidden;
        border: 2px solid #EAC56A;
        flex-shrink: 0;
        background: #0F1E55;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    #header-logo span {
        color: #F2D98B;
        font-size: 26px;
        font-weight: 700;
    }

    #header-text h1 {
        margin: 0;
        font-size: 20px;
        color: #F2D98B; /* Gold */
        font-weight: 700;
    }

    #header-text p {
        margin: 2px 0 0 0;
        font-size: 12px;
        color: #D1D5DB;
    }

    #topbar { 
        display: flex; 
        justify-content: flex-end; 
        align-items: center; 
        margin: 4px 0 8px 0; 
    }

    #clearBtn { 
        padding: 6px 12px; 
        border-radius: 999px; 
        border: none;
        background: #E63946; 
        color: white; 
        font-size: 12px;
        cursor: pointer;
    }

    #chat { 
        border-radius: 14px; 
        background: #0F1E55; /* Deep Royal Blue */
        padding: 12px; 
        height: 440px; 
        overflow-y: auto; 
        box-shadow: 0 0 12px rgba(242, 217, 139, 0.15);
        margin-bottom: 10px;
    }

    .msg-user { text-align: right; margin: 8px 0; }
    .msg-user span { 
        display: inline-block; 
        background: #EAC56A; /* Gold */ 
        color: #0A1A3A;      /* Navy text */
        padding: 8px 12px; 
        border-radius: 12px 12px 0 12px; 
        max-width: 82%; 
        font-weight: 600;
        white-space: pre-wrap;
    }

    .msg-bot { text-align: left; margin: 8px 0; }
    .msg-bot span { 
        display: inline-block; 
        background: #112869;  /* Slightly brighter navy */
        color: #F5F5F5; 
        padding: 8px 12px; 
        border-radius: 12px 12px 12px 0; 
        max-width: 82%; 
        border-left: 3px solid #EAC56A; /* Gold accent stripe */
        white-space: pre-wrap;
    }

    #quickButtons {
        display: flex;
        flex-wrap: wrap;
        gap: 8px;
        margin-bottom: 10px;
    }

    #quickButtons button {
        padding: 8px 14px;
        border-radius: 999px;
        border: none;
        background: linear-gradient(90deg, #EAC56A, #F2D98B);
        color: #0A1A3A; 
        font-weight: 600;
        font-size: 13px;
        cursor: pointer;
    }

    #quickButtons button:active {
        transform: scale(0.95);
    }

    #inputRow { 
        margin-top: 4px; 
        display: flex; 
        gap: 8px; 
    }

    #inputRow input { 
        flex: 1; 
        padding: 12px; 
        border-radius: 999px; 
        border: 1px solid #EAC56A; 
        background: #0F1E55; 
        color: #F5F5F5;
    }

    #inputRow input::placeholder {
        color: #D1D5DB;
    }

    #inputRow button { 
        padding: 12px 18px; 
        border-radius: 999px; 
        border: none;
        background: linear-gradient(90deg, #EAC56A, #F2D98B);
        color: #0A1A3A; 
        font-weight: 700; 
        cursor: pointer;
    }

    #inputRow button:active { 
        transform: scale(0.97); 
    }
  </style>
</head>
<body>
  <div id="header">
    <div id="header-logo">
      <span aria-label="Abtrow Logo">A</span>
    </div>
    <div id="header-text">
      <h1>Abtrow AI – Study Abroad Assistant</h1>
      <p>Smart guidance for Myanmar and Asian students</p>
    </div>
  </div>

  <div id="topbar">
    <button id="clearBtn" onclick="clearChat()">Clear</button>
  </div>

  <div id="chat"></div>

  <div id="quickButtons">
    <button onclick="quickSend('UK')">UK</button>
    <button onclick="quickSend('New Zealand')">New Zealand</button>
    <button onclick="quickSend('Vietnam')">Vietnam</button>
    <button onclick="quickSend('Singapore')">Singapore</button>
    <button onclick="quickSend('Canada')">Canada</button>
    <button onclick="quickSend('Visa Help')">Visa Help</button>
  </div>

  <div id="inputRow">
    <input id="msg" type="text" placeholder="Ask about courses, visas, scholarships..." />
    <button onclick="sendMsg()">Send</button>
  </div>

  <script>
    const chat = document.getElementById('chat');
    const input = document.getElementById('msg');

    const welcomeMessage = `
🌟 မင်္ဂလာပါ!

နိုင်ငံခြားမှာ ပညာသင်ဖို့ စိတ်ဝင်စားနေသူများအတွက်  
Abtrow Education က မေးမြန်းရာအသေးစိတ် အချက်အလက်အားလုံးကို  
အမြန်ဆုံးနှင့် တိကျမှန်ကန်အဖြေပေးဖို့ အဆင်သင့်ဖြစ်နေပါတယ်။ 🌍✈️  

အသေးစိတ်အချက်အလက်များ၊ တက္ကသိုလ်ရွေးချယ်မှုများ၊  
နိုင်ငံရွေးချယ်မှုများအတွက်  
အောက်ပါ Form ကို နှိပ်ပြီး ဖြည့်ပေးပါ👇  

👉 Application Form:  
https://forms.gle/iW3gj2SENKdB5Ckt9  

မေးမြန်းလိုပါက ဖုန်း သို့မဟုတ် အီးမေးလ်မှတဆင့် ဆက်သွယ်နိုင်ပါတယ်👇  
📞 +၉၅၉ ၈၉၁ ၁၁၈ ၈၇  
📧 info@abtrow.com  

သင့်အိပ်မက်တွေကို အကောင်အထည်ဖော်နိုင်ဖို့  
Abtrow က အမြဲတမ်း အတူရှိနေပါမယ်။ 🚀🎓✨  

🤖 Abtrow AI Chatbot is here to help you with further information.
မေးချင်တာလေးတွေကို အခုချိန်မှာပဲ မေးမြန်းနိုင်ပါတယ်။
`;

    function showWelcome() {
        addMessage(welcomeMessage, 'bot');
    }

    function addMessage(text, sender) {
      const div = document.createElement('div');
      div.className = sender === 'user' ? 'msg-user' : 'msg-bot';
      const span = document.createElement('span');
      span.textContent = text;
      div.appendChild(span);
      chat.appendChild(div);
      chat.scrollTop = chat.scrollHeight;
    }

    async function sendMsg() {
      const text = input.value.trim();
      if (!text) return;
      addMessage(text, 'user');
      input.value = '';

      try {
        const res = await fetch('/chat', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ message: text })
        });
        const data = await res.json();
        addMessage(data.reply, 'bot');
      } catch (e) {
        addMessage('Sorry, there was an error connecting to Abtrow AI.', 'bot');
      }
    }

    function clearChat() {
      chat.innerHTML = '';
      showWelcome();
    }

    function quickSend(text) {
      addMessage(text, 'user');
      sendQuick(text);
    }

    async function sendQuick(text) {
      try {
        const res = await fetch('/chat', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ message: text })
        });
        const data = await res.json();
        addMessage(data.reply, 'bot');
      } catch (e) {
        addMessage('Sorry, there was an error connecting to Abtrow AI.', 'bot');
      }
    }

    input.addEventListener('keydown', (e) => {
      if (e.key === 'Enter') sendMsg();
    });

    window.onload = showWelcome;
  </script>
</body>
</html>
"##;
